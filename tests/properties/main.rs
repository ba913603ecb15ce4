//! Property tests for the output contract.

mod contract_properties;
