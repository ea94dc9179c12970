use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("sarif"));
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
