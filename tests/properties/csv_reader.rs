//! Property tests for the CSV employee reader.

use std::path::Path;

use proptest::prelude::*;

use orgcheck::CsvEmployeeRepository;

fn field() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The reader never panics on arbitrary input.
    #[test]
    fn property_reader_never_panics(s in "(?s).{0,512}") {
        let _ = CsvEmployeeRepository::new().read_from(s.as_bytes(), Path::new("fuzz.csv"));
    }

    /// PROPERTY: Well-formed rows survive reading with fields trimmed.
    #[test]
    fn property_well_formed_rows_are_read(
        rows in proptest::collection::vec((field(), field(), field(), 0u32..1_000_000), 1..20)
    ) {
        let mut csv = String::from("Id,firstName,lastName,salary,managerId\n");
        for (i, (_, first, last, salary)) in rows.iter().enumerate() {
            csv.push_str(&format!("  e{} , {} ,{},{}, \n", i, first, last, salary));
        }

        let employees = CsvEmployeeRepository::new()
            .read_from(csv.as_bytes(), Path::new("rows.csv"))
            .unwrap();

        prop_assert_eq!(employees.len(), rows.len());
        for (i, (employee, (_, first, last, salary))) in employees.iter().zip(&rows).enumerate() {
            let expected_id = format!("e{}", i);
            prop_assert_eq!(employee.id(), expected_id.as_str());
            prop_assert_eq!(employee.first_name(), first.as_str());
            prop_assert_eq!(employee.last_name(), last.as_str());
            prop_assert_eq!(employee.salary(), *salary as f64);
            prop_assert!(employee.manager_id().is_none());
        }
    }

    /// PROPERTY: Rows with the wrong number of columns are reported with
    /// their physical line number.
    #[test]
    fn property_column_count_errors_name_the_line(
        good_rows in 0usize..10,
        columns in prop_oneof![1usize..5, 6usize..9]
    ) {
        let mut csv = String::from("Id,firstName,lastName,salary,managerId\n");
        csv.push_str("0,Root,Boss,100,\n");
        for i in 1..=good_rows {
            csv.push_str(&format!("{},A,B,10,0\n", i));
        }
        let bad: Vec<String> = (0..columns).map(|c| format!("x{}", c)).collect();
        csv.push_str(&bad.join(","));
        csv.push('\n');

        let err = CsvEmployeeRepository::new()
            .read_from(csv.as_bytes(), Path::new("bad.csv"))
            .unwrap_err();

        let expected = format!(
            "line {}: expected 5 columns, found {}",
            good_rows + 3,
            columns
        );
        prop_assert_eq!(err.to_string(), expected);
    }
}
