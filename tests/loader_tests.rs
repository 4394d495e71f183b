use hitori::error::HitoriError;
use hitori::grid::Cell;
use hitori::loader::{load_from_file, load_from_reader, GridFormat, LoadOptions};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn tokens(size: Option<usize>) -> LoadOptions {
    LoadOptions {
        format: GridFormat::Tokens,
        size,
        allow_shaded: false,
    }
}

#[test]
fn test_loads_token_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1 1 2").unwrap();
    writeln!(file, "2 1 1").unwrap();
    writeln!(file, "1 2 2").unwrap();

    let g = load_from_file(file.path(), &tokens(Some(3))).unwrap();
    assert_eq!(g.size(), 3);
    assert_eq!(g.get(2, 1), Cell::Kept(2));
    assert_eq!(g.shaded_count(), 0);
}

#[test]
fn test_infers_size_and_skips_blank_lines() {
    let input = "\n10  12\t4\n\n4 10 12\n12 4 10\n\n";
    let g = load_from_reader(Cursor::new(input), &tokens(None)).unwrap();
    assert_eq!(g.size(), 3);
    assert_eq!(g.get(0, 1).value(), 12);
    assert_eq!(g.get(2, 2).value(), 10);
}

#[test]
fn test_loads_digit_rows() {
    let opts = LoadOptions {
        format: GridFormat::Digits,
        ..Default::default()
    };
    let g = load_from_reader(Cursor::new("123\n231\n312\n"), &opts).unwrap();
    assert_eq!(g.get(0, 2), Cell::Kept(3));
    assert_eq!(g.get(2, 0), Cell::Kept(3));
}

#[test]
fn test_digit_zero_is_rejected() {
    let opts = LoadOptions {
        format: GridFormat::Digits,
        ..Default::default()
    };
    let res = load_from_reader(Cursor::new("12\n20\n"), &opts);
    assert!(matches!(res, Err(HitoriError::Parse { line: 2, .. })));
}

#[test]
fn test_wrong_token_count_is_a_shape_error() {
    let res = load_from_reader(Cursor::new("1 2 3\n2 3\n3 1 2\n"), &tokens(None));
    match res {
        Err(HitoriError::Shape {
            line,
            expected,
            found,
        }) => {
            assert_eq!(line, 2);
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected shape error, got {:?}", other),
    }
}

#[test]
fn test_configured_size_is_enforced() {
    let res = load_from_reader(Cursor::new("1 2\n2 1\n"), &tokens(Some(3)));
    assert!(matches!(
        res,
        Err(HitoriError::Shape {
            expected: 3,
            found: 2,
            ..
        })
    ));

    let res = load_from_reader(Cursor::new("1 2 3\n2 3 1\n"), &tokens(Some(3)));
    assert!(matches!(
        res,
        Err(HitoriError::RowCount {
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn test_too_many_rows_is_rejected() {
    let res = load_from_reader(Cursor::new("1 2\n2 1\n1 2\n"), &tokens(None));
    assert!(matches!(res, Err(HitoriError::RowCount { .. })));
}

#[test]
fn test_non_integer_token_is_rejected() {
    let res = load_from_reader(Cursor::new("1 x\n2 1\n"), &tokens(None));
    match res {
        Err(HitoriError::Parse { line, token }) => {
            assert_eq!(line, 1);
            assert_eq!(token, "x");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_oversized_value_reports_its_file_line() {
    // The blank line shifts file lines away from row indices.
    let res = load_from_reader(Cursor::new("1 2\n\n2 5000000000\n"), &tokens(None));
    match res {
        Err(HitoriError::Parse { line, token }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "5000000000");
        }
        other => panic!("expected parse error, got {:?}", other),
    }

    let opts = LoadOptions {
        allow_shaded: true,
        ..Default::default()
    };
    let res = load_from_reader(Cursor::new("\n-5000000000 1\n1 2\n"), &opts);
    assert!(matches!(res, Err(HitoriError::Parse { line: 2, .. })));
}

#[test]
fn test_negative_values_need_allow_shaded() {
    let input = "-1 2\n2 1\n";
    let res = load_from_reader(Cursor::new(input), &tokens(None));
    assert!(matches!(res, Err(HitoriError::Parse { .. })));

    let opts = LoadOptions {
        allow_shaded: true,
        ..Default::default()
    };
    let g = load_from_reader(Cursor::new(input), &opts).unwrap();
    assert_eq!(g.get(0, 0), Cell::Shaded(1));
}

#[test]
fn test_empty_input_is_rejected() {
    let res = load_from_reader(Cursor::new("\n\n"), &tokens(None));
    assert!(matches!(res, Err(HitoriError::Empty)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let res = load_from_file(dir.path().join("nope.txt"), &tokens(None));
    assert!(matches!(res, Err(HitoriError::Io(_))));
}
