use outputter::OutputError;
use outputter::output::{BuiltinFormat, OutputRegistry, Outputter};
use outputter::test_utils::SharedBuffer;
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,\"]{0,8}"
}

fn format() -> impl Strategy<Value = BuiltinFormat> {
    prop::sample::select(BuiltinFormat::ALL.to_vec())
}

fn buffered(format: BuiltinFormat) -> (Box<dyn Outputter>, SharedBuffer) {
    let out = OutputRegistry::with_builtins()
        .new_outputter(format.name())
        .unwrap();
    let buf = SharedBuffer::new();
    out.set_writer(Box::new(buf.clone())).unwrap();
    (out, buf)
}

proptest! {
    #[test]
    fn rows_wider_than_headers_are_rejected(
        format in format(),
        headers in prop::collection::vec("[a-z]{1,6}", 1..5),
        extra in 1usize..4,
    ) {
        let (out, _) = buffered(format);
        out.set_headers(headers.clone());
        let row = vec!["x".to_string(); headers.len() + extra];
        let err = out.add_row(row).unwrap_err();
        let rejected = matches!(err, OutputError::TooManyValues { .. });
        prop_assert!(rejected);
        prop_assert_eq!(out.row_count(), 0);
    }

    #[test]
    fn rows_up_to_header_width_are_accepted(
        format in format(),
        width in 1usize..6,
        rows in prop::collection::vec(prop::collection::vec(cell(), 0..6), 0..10),
    ) {
        let (out, _) = buffered(format);
        out.set_headers((0..width).map(|i| format!("h{i}")).collect());
        let mut accepted = 0;
        for row in rows {
            let fits = row.len() <= width;
            prop_assert_eq!(out.add_row(row).is_ok(), fits);
            if fits {
                accepted += 1;
            }
        }
        prop_assert_eq!(out.row_count(), accepted);
    }

    #[test]
    fn draw_is_repeatable(
        format in format(),
        rows in prop::collection::vec(prop::collection::vec(cell(), 3), 0..8),
    ) {
        let (out, buf) = buffered(format);
        out.set_headers(vec!["a".into(), "b".into(), "c".into()]);
        for row in rows {
            out.add_row(row).unwrap();
        }
        out.draw().unwrap();
        let first = buf.take();
        out.draw().unwrap();
        prop_assert_eq!(first, buf.take());
    }

    #[test]
    fn json_rows_round_trip_through_serde(
        rows in prop::collection::vec(prop::collection::vec(cell(), 2), 0..8),
    ) {
        let (out, buf) = buffered(BuiltinFormat::Json);
        out.set_headers(vec!["k1".into(), "k2".into()]);
        for row in &rows {
            out.add_row(row.clone()).unwrap();
        }
        out.draw().unwrap();
        let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(&buf.contents()).unwrap();
        prop_assert_eq!(parsed.len(), rows.len());
        for (object, row) in parsed.iter().zip(&rows) {
            prop_assert_eq!(object["k1"].as_str(), Some(row[0].as_str()));
            prop_assert_eq!(object["k2"].as_str(), Some(row[1].as_str()));
        }
    }
}
