//! End-to-end integration tests
//!
//! These tests run both conversion directions against a copy of the record
//! tree in tests/fixtures/dat/outfits:
//! 1. `r` mode output is compared with tests/fixtures/expected.csv
//! 2. `w` mode applies tests/fixtures/edited.csv and the files are re-read
//! 3. A full read → write → read cycle must not change any value
//!
//! The fixture tree is copied into a temporary directory first, since `w`
//! mode rewrites files in place.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};
    use xml_balancer::cli::Mode;
    use xml_balancer::core::element::{child_element, count_children, element_text};
    use xml_balancer::io::load_document;
    use xml_balancer::{
        create_conversion, extract_table, BalancerConfig, BalancerError, MergeWarning,
    };

    const FIXTURES: &str = "tests/fixtures";

    fn copy_tree(from: &Path, to: &Path) {
        fs::create_dir_all(to).expect("Failed to create fixture directory");
        for entry in fs::read_dir(from).expect("Failed to read fixture directory") {
            let entry = entry.unwrap();
            let target = to.join(entry.file_name());
            if entry.file_type().unwrap().is_dir() {
                copy_tree(&entry.path(), &target);
            } else {
                fs::copy(entry.path(), &target).expect("Failed to copy fixture file");
            }
        }
    }

    /// Copy the outfit fixtures into a fresh directory and point a config at them
    fn workspace() -> (TempDir, BalancerConfig) {
        let dir = tempdir().expect("Failed to create temp dir");
        copy_tree(&Path::new(FIXTURES).join("dat"), &dir.path().join("dat"));

        let config = BalancerConfig::default()
            .with_pattern(format!("{}/dat/outfits/**/*.xml", dir.path().display()));
        (dir, config)
    }

    fn outfit_path(dir: &TempDir, relative: &str) -> PathBuf {
        dir.path().join("dat/outfits").join(relative)
    }

    #[test]
    fn test_read_mode_matches_expected_csv() {
        let (dir, config) = workspace();
        let csv_path = dir.path().join("outfits.csv");

        let report = create_conversion(Mode::Read, config)
            .run(&csv_path)
            .unwrap_or_else(|e| panic!("Failed to extract: {}", e));

        let actual = fs::read_to_string(&csv_path).unwrap();
        let expected = fs::read_to_string(Path::new(FIXTURES).join("expected.csv")).unwrap();
        assert_eq!(
            actual, expected,
            "\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            actual, expected
        );
        assert_eq!(report.records, 3);
        assert_eq!(report.columns, 11);
    }

    #[test]
    fn test_write_mode_applies_edits() {
        let (dir, config) = workspace();
        let specific_before = child_element(
            &load_document(&outfit_path(&dir, "weapons/laser_cannon.xml")).unwrap(),
            "specific",
        )
        .cloned();

        let report = create_conversion(Mode::Write, config.clone())
            .run(&Path::new(FIXTURES).join("edited.csv"))
            .unwrap_or_else(|e| panic!("Failed to merge: {}", e));

        assert_eq!(report.records, 4);
        assert_eq!(report.files_written, 3);
        assert_eq!(report.files_skipped, 0);
        assert_eq!(
            report.warnings,
            vec![MergeWarning::DuplicateTag {
                record: "Unicorp Hawk 150 Engine".to_string(),
                tag: "rarity".to_string(),
                removed: 1,
            }]
        );

        let (_, table) = extract_table(&config).unwrap();

        // overwrite and missing-tag insertion
        let laser = table.get("Laser Cannon MK1").unwrap();
        assert_eq!(laser.value("mass"), "5");
        assert_eq!(laser.value("cpu"), "2");
        // empty cells leave existing text alone
        assert_eq!(
            laser.value("description"),
            "A basic laser, the staple of \"every\" pilot, cheap & reliable."
        );

        // last row for a name wins, empty license is skipped
        let shield = table.get("Shield Booster").unwrap();
        assert_eq!(shield.value("price"), "9500");
        assert_eq!(shield.value("license"), "Basic");

        let engine = load_document(&outfit_path(&dir, "core_systems/hawk_engine.xml")).unwrap();
        let general = child_element(&engine, "general").unwrap();
        assert_eq!(count_children(general, "rarity"), 1);
        assert_eq!(element_text(child_element(general, "rarity").unwrap()), "3");
        assert_eq!(count_children(general, "unique"), 1);

        let laser_doc = load_document(&outfit_path(&dir, "weapons/laser_cannon.xml")).unwrap();
        let last = child_element(&laser_doc, "general")
            .unwrap()
            .children
            .iter()
            .filter_map(xml_balancer::core::element::as_element)
            .last()
            .unwrap();
        assert_eq!(last.name, "cpu");
        assert_eq!(child_element(&laser_doc, "specific").cloned(), specific_before);
        assert_eq!(
            child_element(child_element(&laser_doc, "general").unwrap(), "slot")
                .unwrap()
                .attributes
                .get("prop")
                .map(String::as_str),
            Some("systems")
        );
    }

    #[test]
    fn test_write_mode_emits_xml_declaration() {
        let (dir, config) = workspace();

        create_conversion(Mode::Write, config)
            .run(&Path::new(FIXTURES).join("edited.csv"))
            .unwrap();

        let written = fs::read_to_string(outfit_path(&dir, "utility/shield_booster.xml")).unwrap();
        assert!(written.starts_with("<?xml"));
        assert!(written.contains("<price>9500</price>"));
    }

    #[rstest]
    #[case::pretty(true)]
    #[case::compact(false)]
    fn test_round_trip_keeps_values(#[case] pretty: bool) {
        let (dir, config) = workspace();
        let config = config.with_pretty(pretty);
        let csv_path = dir.path().join("outfits.csv");

        let (schema_before, table_before) = extract_table(&config).unwrap();
        let specific_before =
            child_element(&load_document(&outfit_path(&dir, "weapons/laser_cannon.xml")).unwrap(), "specific").cloned();

        create_conversion(Mode::Read, config.clone()).run(&csv_path).unwrap();
        create_conversion(Mode::Write, config.clone()).run(&csv_path).unwrap();
        let (schema_after, table_after) = extract_table(&config).unwrap();

        assert_eq!(schema_after, schema_before);
        assert_eq!(table_after, table_before);
        assert_eq!(
            child_element(&load_document(&outfit_path(&dir, "weapons/laser_cannon.xml")).unwrap(), "specific").cloned(),
            specific_before
        );

        // a second read produces the identical CSV
        let first = fs::read_to_string(&csv_path).unwrap();
        create_conversion(Mode::Read, config).run(&csv_path).unwrap();
        assert_eq!(fs::read_to_string(&csv_path).unwrap(), first);
    }

    #[test]
    fn test_row_without_name_fails_before_touching_files() {
        let (dir, config) = workspace();
        let laser = outfit_path(&dir, "weapons/laser_cannon.xml");
        let before = fs::read_to_string(&laser).unwrap();
        let csv_path = dir.path().join("broken.csv");
        fs::write(&csv_path, "\"name\",\"mass\"\n\"\",\"5\"\n").unwrap();

        let result = create_conversion(Mode::Write, config).run(&csv_path);

        assert!(matches!(result, Err(BalancerError::MalformedRow { line: 2, .. })));
        assert_eq!(fs::read_to_string(&laser).unwrap(), before);
    }

    #[rstest]
    #[case::blank_column("\"name\",\"\",\"mass\"\n\"Laser Cannon MK1\",\"5\",\"4\"\n")]
    #[case::column_with_space("\"name\",\"fire rate\"\n\"Laser Cannon MK1\",\"3\"\n")]
    fn test_invalid_header_fails_before_touching_files(#[case] csv: &str) {
        let (dir, config) = workspace();
        let laser = outfit_path(&dir, "weapons/laser_cannon.xml");
        let before = fs::read_to_string(&laser).unwrap();
        let csv_path = dir.path().join("export.csv");
        fs::write(&csv_path, csv).unwrap();

        let result = create_conversion(Mode::Write, config.clone()).run(&csv_path);

        assert!(matches!(result, Err(BalancerError::MalformedRow { line: 1, .. })));
        assert_eq!(fs::read_to_string(&laser).unwrap(), before);
        assert!(extract_table(&config).is_ok());
    }

    #[test]
    fn test_malformed_xml_fails_read_mode() {
        let (dir, config) = workspace();
        fs::write(outfit_path(&dir, "utility/broken.xml"), "<outfit name=\"Broken\"><general>").unwrap();

        let result = create_conversion(Mode::Read, config).run(&dir.path().join("out.csv"));

        assert!(matches!(result, Err(BalancerError::XmlParse { .. })));
        assert!(!dir.path().join("out.csv").exists());
    }
}
