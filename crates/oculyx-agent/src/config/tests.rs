#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.source.kind, SourceKind::File);
        assert_eq!(config.source.path, PathBuf::from("store/all_eye.xlsx"));
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.explain.disease, "D");
    }

    #[test]
    fn test_http_source_section() {
        let config = Config::parse(
            r#"
            [source]
            kind = "http"
            url = "https://cohort.example.org/store/all_eye.xlsx"
            timeout_secs = 5

            [explain]
            disease = "G"
            "#,
        )
        .unwrap();
        assert_eq!(config.source.kind, SourceKind::Http);
        assert_eq!(config.source.url, "https://cohort.example.org/store/all_eye.xlsx");
        assert_eq!(config.source.timeout_secs, 5);
        assert_eq!(config.explain.disease, "G");
        assert_eq!(config.logging.filter, default_log_filter());
    }

    #[test]
    fn test_unknown_source_kind_is_rejected() {
        assert!(Config::parse("[source]\nkind = \"ftp\"\n").is_err());
    }
}
