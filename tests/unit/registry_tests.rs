//! Registry behavior, including formats added from outside the crate.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use outputter::output::{
    BuiltinFormat, DEFAULT_OUTPUTTER, Dataset, OutputRegistry, Outputter, OutputterExt, Render,
    Session,
};
use outputter::test_utils::SharedBuffer;
use outputter::{OutputError, Result};

/// `key=value` pairs, one record per line.
struct PairsRender;

impl Render for PairsRender {
    fn name(&self) -> &str {
        "pairs"
    }

    fn render(&self, data: &Dataset, _pretty: bool, out: &mut dyn Write) -> Result<()> {
        for record in data.records() {
            let pairs: Vec<String> = data
                .headers()
                .iter()
                .zip(record)
                .map(|(h, v)| format!("{h}={v}"))
                .collect();
            writeln!(out, "{}", pairs.join(" "))?;
        }
        Ok(())
    }
}

#[test]
fn custom_render_plugs_into_registry() {
    let registry = OutputRegistry::with_builtins();
    assert!(
        registry
            .register_output("pairs", || Box::new(Session::new(PairsRender)))
            .unwrap()
    );

    let out = registry.new_outputter("pairs").unwrap();
    let buf = SharedBuffer::new();
    out.set_writer(Box::new(buf.clone())).unwrap();
    out.set_headers_from(["job", "status"]);
    out.add_row_from(["backup", "ok"]).unwrap();
    out.add_row_from(["cleanup"]).unwrap();
    out.draw().unwrap();

    assert_eq!(out.format_name(), "pairs");
    assert!(!out.color_support());
    assert_eq!(buf.contents(), "job=backup status=ok\njob=cleanup status=\n");
    assert!(registry.outputters().contains("pairs"));
}

#[test]
fn builtin_names_cannot_be_replaced() {
    let registry = OutputRegistry::with_builtins();
    let replaced = registry
        .register_output("json", || Box::new(Session::new(PairsRender)))
        .unwrap();
    assert!(!replaced);
    assert_eq!(registry.new_outputter("json").unwrap().format_name(), "json");
}

#[test]
fn lookup_is_case_sensitive() {
    let registry = OutputRegistry::with_builtins();
    let err = registry.new_outputter("JSON").err().unwrap();
    assert!(matches!(err, OutputError::UnknownOutputter(name) if name == "JSON"));
}

#[test]
fn empty_registry_still_has_default() {
    let registry = OutputRegistry::new();
    assert!(registry.outputters().is_empty());
    assert_eq!(registry.default_outputter().format_name(), DEFAULT_OUTPUTTER.name());
}

#[test]
fn every_builtin_is_listed() {
    let registry = OutputRegistry::with_builtins();
    let names: Vec<String> = registry.outputters().into_iter().collect();
    let mut expected: Vec<String> = BuiltinFormat::ALL.iter().map(|f| f.name().to_string()).collect();
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn concurrent_registration_has_one_winner() {
    let registry = Arc::new(OutputRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .register_output("pairs", || Box::new(Session::new(PairsRender)))
                    .unwrap()
            })
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|inserted| *inserted)
        .count();
    assert_eq!(winners, 1);
}

#[test]
fn instances_do_not_share_state() {
    let registry = OutputRegistry::with_builtins();
    let first: Box<dyn Outputter> = registry.new_outputter("csv").unwrap();
    let second = registry.new_outputter("csv").unwrap();
    first.set_headers_from(["a"]);
    first.set_pretty();
    assert!(second.headers().is_empty());
    assert!(!second.is_pretty());
}
