//! End-to-end tests for the load pipeline
//!
//! Documents of every shape go through the store: file read -> schema
//! detection -> parse (with executable resolution) -> merge -> lookup.

use conf_core::{BatchPolicy, ConfigStore, Error, LoadOptions, LoadOutcome};
use conf_resolver::{ConventionRoots, ExecutableResolver, Platform, ResolverEnv, ResolverOptions};
use conf_schema::{SchemaKind, Value};
use conf_test_utils::{TestDocs, TestPathDirs, make_executable, make_plain_file};
use serde_json::json;

/// A store whose resolver only sees `dirs` on a Windows-style PATH.
fn windows_store(dirs: &TestPathDirs) -> ConfigStore {
    ConfigStore::new(
        ExecutableResolver::new(
            Platform::Windows,
            ResolverEnv::default()
                .with_path(dirs.path_var(';'))
                .with_pathext(".EXE;.BAT"),
            ResolverOptions::without_subprocess(),
        )
        .with_convention_roots(ConventionRoots::default()),
    )
}

mod m1_mixed_directory {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_schema_lands_in_one_store() {
        let dirs = TestPathDirs::new(1);
        let qpdf = make_plain_file(dirs.dir(0), "qpdf.exe");
        let docs = TestDocs::new();
        docs.write(
            "10-postman.json",
            &json!({"id": "e1", "name": "staging", "values": [
                {"key": "host", "value": "staging.example.org", "type": "default", "enabled": true}
            ]}),
        );
        docs.write(
            "20-tools.json",
            &json!({"tools": {"qpdf": {
                "windowsPath": "qpdf",
                "linuxPath": "qpdf",
                "windowsArguments": ["--linearize"],
                "required": true
            }}}),
        );
        docs.write(
            "30-advanced.json",
            &json!({
                "formats": ["pdf", "png"],
                "limits": {"pages": 100},
                "General": [{"key": "timeout", "value": "30", "type": "int"}]
            }),
        );
        docs.write(
            "40-structured.json",
            &json!({"General": [
                {"key": "timeout", "value": "45", "type": "int"},
                {"key": "debug", "value": "on", "type": "bool"}
            ]}),
        );
        let mut store = windows_store(&dirs);

        let report = store.load_directory(docs.path()).unwrap();

        assert!(report.is_success(), "failures: {:?}", report.failed);
        let schemas: Vec<_> = report
            .loaded
            .iter()
            .map(|(_, outcome)| match outcome {
                LoadOutcome::Loaded { schema } => Some(*schema),
                LoadOutcome::AlreadyLoaded => None,
            })
            .collect();
        assert_eq!(
            schemas,
            vec![
                Some(SchemaKind::Postman),
                Some(SchemaKind::CrossPlatformExecutable),
                Some(SchemaKind::AdvancedStructured),
                Some(SchemaKind::Structured),
            ]
        );

        assert_eq!(
            store.value("staging", "host"),
            Some(&Value::from("staging.example.org"))
        );
        let tool = store.executable("tools", "qpdf").unwrap();
        assert_eq!(tool.path(), Some(qpdf.as_path()));
        assert_eq!(tool.arguments, vec!["--linearize"]);
        assert_eq!(store.value("formats", "1"), Some(&Value::from("png")));
        assert_eq!(store.value("limits", "pages"), Some(&Value::Integer(100)));
        // 40 overrides 30.
        assert_eq!(store.value("General", "timeout"), Some(&Value::Integer(45)));
        assert_eq!(store.value("General", "debug"), Some(&Value::Boolean(true)));
    }

    #[test]
    fn test_broken_document_does_not_block_the_rest() {
        let dirs = TestPathDirs::new(1);
        let docs = TestDocs::new();
        docs.write("a.json", &json!({"General": [{"key": "a", "value": 1}]}));
        docs.write(
            "b.json",
            &json!({"tools": {"ghost": {"path": "this-will-never-exist-xyz", "required": true}}}),
        );
        docs.write("c.json", &json!({"General": [{"key": "c", "value": 3}]}));
        let mut store = windows_store(&dirs);

        let report = store.load_directory(docs.path()).unwrap();

        assert_eq!(report.loaded.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert!(matches!(
            report.failed[0].1,
            Error::Schema(conf_schema::Error::ExecutableNotFound { .. })
        ));
        assert!(store.contains("General", "a"));
        assert!(store.contains("General", "c"));
        assert!(!store.contains("tools", "ghost"));
    }
}

mod m2_resolution {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pathext_order_picks_exe_over_bat() {
        let dirs = TestPathDirs::new(2);
        make_plain_file(dirs.dir(0), "foo.bat");
        let exe = make_plain_file(dirs.dir(0), "foo.exe");
        make_plain_file(dirs.dir(1), "foo.exe");
        let mut store = windows_store(&dirs);

        store
            .load_document(&json!({"tools": {"foo": {"path": "foo"}}}))
            .unwrap();

        assert_eq!(store.executable("tools", "foo").unwrap().path(), Some(exe.as_path()));
    }

    #[test]
    fn test_optional_missing_tool_is_recorded_unresolved() {
        let dirs = TestPathDirs::new(1);
        let mut store = windows_store(&dirs);

        store
            .load_document(&json!({"tools": {
                "ghost": {"path": "this-will-never-exist-xyz", "description": "optional"}
            }}))
            .unwrap();

        let ghost = store.executable("tools", "ghost").unwrap();
        assert_eq!(ghost.path(), None);
        assert_eq!(ghost.description, "optional");
    }

    #[cfg(unix)]
    #[test]
    fn test_literal_system_path_is_returned_as_is() {
        let resolver = ExecutableResolver::new(
            Platform::Unix,
            ResolverEnv::default(),
            ResolverOptions::without_subprocess(),
        );
        let sh = std::path::Path::new("/bin/sh");
        if sh.exists() {
            assert_eq!(resolver.resolve("/bin/sh"), Some(sh.to_path_buf()));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_store_uses_exec_bit() {
        let dirs = TestPathDirs::new(2);
        make_plain_file(dirs.dir(0), "tool");
        let expected = make_executable(dirs.dir(1), "tool");
        let mut store = ConfigStore::new(
            ExecutableResolver::new(
                Platform::Unix,
                ResolverEnv::default().with_path(dirs.path_var(':')),
                ResolverOptions::without_subprocess(),
            )
            .with_convention_roots(ConventionRoots::default()),
        );

        store
            .load_document(&json!({"tools": {"tool": {"path": "tool", "required": true}}}))
            .unwrap();

        assert_eq!(
            store.executable("tools", "tool").unwrap().path(),
            Some(expected.as_path())
        );
    }
}

mod m3_store_lifecycle {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_idempotent_then_forced_then_cleared() {
        let dirs = TestPathDirs::new(1);
        let docs = TestDocs::new();
        let a = docs.write("a.json", &json!({"General": [{"key": "k", "value": "a"}]}));
        let b = docs.write("b.json", &json!({"General": [{"key": "k", "value": "b"}]}));
        let mut store = windows_store(&dirs);

        let report = store.load_batch([&a, &b, &a], BatchPolicy::FailFast);
        assert!(report.is_success());
        assert_eq!(report.loaded[2].1, LoadOutcome::AlreadyLoaded);
        assert_eq!(store.value("General", "k"), Some(&Value::from("b")));

        store.load_file(&a, LoadOptions::forced()).unwrap();
        assert_eq!(store.value("General", "k"), Some(&Value::from("a")));

        store.clear();
        assert!(store.is_empty());
        // After clearing, the file counts as new again.
        assert!(matches!(
            store.load_file(&a, LoadOptions::default()).unwrap(),
            LoadOutcome::Loaded { .. }
        ));
    }

    #[test]
    fn test_store_serializes_values_and_descriptors() {
        let dirs = TestPathDirs::new(1);
        let tool = make_plain_file(dirs.dir(0), "tool.exe");
        let mut store = windows_store(&dirs);
        store
            .load_str(r#"{"General": [{"key": "n", "value": "1.5", "type": "float"}]}"#)
            .unwrap();
        store
            .load_str(r#"{"tools": {"tool": {"path": "tool", "filesToCheck": []}}}"#)
            .unwrap();

        let json = serde_json::to_value(&store).unwrap();

        assert_eq!(json["General"]["n"], json!(1.5));
        assert_eq!(json["tools"]["tool"]["path"], json!(tool.to_string_lossy()));
        assert_eq!(json["tools"]["tool"]["required"], json!(false));
    }

    #[test]
    fn test_placeholders_through_store() {
        let dirs = TestPathDirs::new(1);
        let mut store = windows_store(&dirs);
        store
            .load_document(&json!({
                "paths": ["[ROOT]/a", "[ROOT]/b"],
                "General": [{"key": "out", "value": "[ROOT]/out"}]
            }))
            .unwrap();
        let vars = [("[ROOT]", "/srv")];

        assert_eq!(
            store.get_substituted("General", "out", &vars),
            Some(Value::from("/srv/out"))
        );
        assert_eq!(
            store.get_substituted("paths", "0", &vars),
            Some(Value::from("/srv/a"))
        );
    }
}
