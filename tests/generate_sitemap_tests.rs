use asset_sitemap::{
    generate_sitemap, render_sitemap_from_csv_string, Error, SitemapBuilder, SitemapConfig,
    DEFAULT_SITEMAP_CONFIG,
};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use test_utils::constants::{
    ASSETS_MASTER_CSV_PATH, MESSY_TICKERS_CSV_PATH, MISSING_TICKER_COLUMN_CSV_PATH, TEST_BASE_URL,
};
use test_utils::{
    count_url_elements, extract_element_texts, extract_locs, read_gzip_file, ticker_csv,
};

fn path_str(path: &Path) -> &str {
    path.to_str().expect("Non UTF-8 temp path")
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_sitemap_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");
        let config = SitemapConfig {
            base_url: TEST_BASE_URL,
            csv_path: ASSETS_MASTER_CSV_PATH.to_str().unwrap(),
            output_file: path_str(&output),
            ..DEFAULT_SITEMAP_CONFIG
        };

        let summary = generate_sitemap(config).expect("Failed to generate sitemap");

        let xml = fs::read_to_string(&output).unwrap();
        assert_eq!(summary.url_count, 7);
        assert_eq!(summary.ticker_count, 4);
        assert_eq!(summary.output_file, output);
        assert_eq!(count_url_elements(&xml), summary.url_count);

        let lastmods = extract_element_texts(&xml, "lastmod");
        let expected_lastmod = summary.lastmod.format("%Y-%m-%d").to_string();
        assert!(lastmods.iter().all(|lastmod| *lastmod == expected_lastmod));
        assert!(NaiveDate::parse_from_str(&expected_lastmod, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_url_count_is_static_pages_plus_distinct_tickers() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");
        let config = SitemapConfig {
            base_url: TEST_BASE_URL,
            csv_path: MESSY_TICKERS_CSV_PATH.to_str().unwrap(),
            output_file: path_str(&output),
            ..DEFAULT_SITEMAP_CONFIG
        };

        let summary = SitemapBuilder::with_lastmod(config, test_date())
            .run()
            .unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        let locs = extract_locs(&xml);

        assert_eq!(summary.url_count, 3 + 4);
        assert_eq!(locs.len(), 3 + 4);
        assert_eq!(
            locs.iter()
                .filter(|loc| *loc == "https://example.com/asset/PETR4")
                .count(),
            1
        );
        assert!(!locs.iter().any(|loc| loc.ends_with("/asset/nan")));
        assert!(!locs.iter().any(|loc| loc.ends_with("/asset/NaN")));
        assert!(!locs.iter().any(|loc| loc.ends_with("/asset/")));
    }

    #[test]
    fn test_every_loc_starts_with_base_url() {
        let csv = ticker_csv(&["PETR4", "VALE3", "ITUB4"]);

        let xml = render_sitemap_from_csv_string(&csv, DEFAULT_SITEMAP_CONFIG, test_date()).unwrap();

        for loc in extract_locs(&xml) {
            assert!(
                loc.starts_with("https://meucreditoprivado.netlify.app/"),
                "Unexpected loc: {}",
                loc
            );
        }
    }

    #[test]
    fn test_example_asset_list() {
        let csv = ticker_csv(&["PETR4", " VALE3 ", "nan", "PETR4"]);
        let config = SitemapConfig {
            base_url: TEST_BASE_URL,
            ..DEFAULT_SITEMAP_CONFIG
        };

        let xml = render_sitemap_from_csv_string(&csv, config, test_date()).unwrap();

        assert_eq!(
            extract_locs(&xml),
            vec![
                "https://example.com/",
                "https://example.com/charts",
                "https://example.com/primary",
                "https://example.com/asset/PETR4",
                "https://example.com/asset/VALE3",
            ]
        );
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");
        let config = SitemapConfig {
            base_url: TEST_BASE_URL,
            csv_path: MESSY_TICKERS_CSV_PATH.to_str().unwrap(),
            output_file: path_str(&output),
            ..DEFAULT_SITEMAP_CONFIG
        };
        let builder = SitemapBuilder::with_lastmod(config, test_date());

        builder.run().unwrap();
        let first = fs::read(&output).unwrap();
        builder.run().unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");
        fs::write(&output, "stale content that is longer than nothing at all ".repeat(500)).unwrap();
        let config = SitemapConfig {
            base_url: TEST_BASE_URL,
            csv_path: ASSETS_MASTER_CSV_PATH.to_str().unwrap(),
            output_file: path_str(&output),
            ..DEFAULT_SITEMAP_CONFIG
        };

        SitemapBuilder::with_lastmod(config, test_date()).run().unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(!xml.contains("stale content"));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_gzip_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml.gz");
        let config = SitemapConfig {
            base_url: TEST_BASE_URL,
            csv_path: ASSETS_MASTER_CSV_PATH.to_str().unwrap(),
            output_file: path_str(&output),
            ..DEFAULT_SITEMAP_CONFIG
        };
        let builder = SitemapBuilder::with_lastmod(config, test_date());

        builder.run().unwrap();

        let tickers = vec![
            "PETR4".to_string(),
            "VALE3".to_string(),
            "ELET3".to_string(),
            "ITUB4".to_string(),
        ];
        assert_eq!(
            read_gzip_file(&output),
            builder.build_document(&tickers).render_xml()
        );
    }

    #[test]
    fn test_missing_output_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no_such_dir").join("sitemap.xml");
        let config = SitemapConfig {
            csv_path: ASSETS_MASTER_CSV_PATH.to_str().unwrap(),
            output_file: path_str(&output),
            ..DEFAULT_SITEMAP_CONFIG
        };

        let result = generate_sitemap(config);

        assert!(matches!(result, Err(Error::IoError(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");
        fs::write(&output, "previous").unwrap();
        let config = SitemapConfig {
            csv_path: "tests/test_files/does_not_exist.csv",
            output_file: path_str(&output),
            ..DEFAULT_SITEMAP_CONFIG
        };

        let result = generate_sitemap(config);

        assert!(matches!(result, Err(Error::IoError(_))));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_missing_column_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sitemap.xml");
        let config = SitemapConfig {
            csv_path: MISSING_TICKER_COLUMN_CSV_PATH.to_str().unwrap(),
            output_file: path_str(&output),
            ..DEFAULT_SITEMAP_CONFIG
        };

        let result = generate_sitemap(config);

        assert!(matches!(result, Err(Error::MissingColumnError(_))));
        assert!(!output.exists());
    }
}
