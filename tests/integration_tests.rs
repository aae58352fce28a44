mod integration_tests_helper {

    use std::path::PathBuf;
    use tokviz::{analyze, read_source_file, Analysis, Category, SplitMode};

    pub fn sample_path() -> PathBuf {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");

        let mut test_file_path = PathBuf::from(manifest_dir);
        test_file_path.push("test_data/sample.txt");
        test_file_path
    }

    pub fn get_sample_analysis() -> Analysis {
        let source = read_source_file(&sample_path());

        // assert that reading the file was successful
        assert!(source.is_ok());

        analyze(&source.unwrap(), SplitMode::Delimited)
    }

    pub fn get_pairs(analysis: &Analysis) -> Vec<(String, Category)> {
        analysis
            .get_tokens()
            .iter()
            .map(|token| (token.get_token().to_string(), token.get_category()))
            .collect()
    }

    pub fn get_pair(token: &str, category: Category) -> (String, Category) {
        (token.to_string(), category)
    }
}

mod integration_tests {
    use crate::integration_tests_helper::{get_pair, get_pairs, get_sample_analysis};

    use std::fs;
    use tokviz::{
        analyze, write_report, Category, Counts, SplitMode, TransitionDiagram,
    };

    #[test]
    fn test_sample_file() {
        let analysis = get_sample_analysis();

        let expected_list = vec![
            get_pair("if", Category::Keyword),
            get_pair("x", Category::Identifier),
            get_pair(">=", Category::RelationalOperator),
            get_pair("10", Category::UnsignedNumber),
            get_pair("y", Category::Identifier),
            get_pair("=", Category::Invalid),
            get_pair("2z", Category::Invalid),
            get_pair("while", Category::Keyword),
            get_pair("count", Category::Identifier),
            get_pair("!=", Category::RelationalOperator),
            get_pair("0", Category::UnsignedNumber),
            get_pair("return", Category::Keyword),
            get_pair("count", Category::Identifier),
        ];

        assert_eq!(get_pairs(&analysis), expected_list);

        let expected_counts = Counts {
            spaces: 16,
            tabs: 1,
            keywords: 3,
            relational_operators: 2,
            numbers: 2,
            identifiers: 4,
        };

        assert_eq!(*analysis.get_counts(), expected_counts);
    }

    #[test]
    fn test_report_and_diagram_agree() {
        let analysis = get_sample_analysis();

        let mut report: Vec<u8> = Vec::new();
        write_report(&mut report, &analysis).unwrap();
        let report = String::from_utf8(report).unwrap();

        let diagram = TransitionDiagram::new(analysis.get_tokens());
        let mut dot: Vec<u8> = Vec::new();
        diagram.write_dot(&mut dot).unwrap();
        let dot = String::from_utf8(dot).unwrap();

        for token in analysis.get_tokens() {
            let line = format!("{} => {}", token.get_token(), token.get_category());
            assert!(report.contains(&line), "report is missing {line}");
            assert!(dot.contains(&format!("  {}\\n", line)), "caption is missing {line}");
        }

        assert_eq!(dot.matches("S0 -> ERROR").count(), 2);
        assert_eq!(dot.matches("penwidth=2.0").count(), 13);
    }

    #[test]
    fn test_repeated_runs_write_identical_files() {
        let mut first_path = std::env::temp_dir();
        first_path.push(format!("tokviz_first_{}.dot", std::process::id()));
        let mut second_path = std::env::temp_dir();
        second_path.push(format!("tokviz_second_{}.dot", std::process::id()));

        let analysis = get_sample_analysis();
        TransitionDiagram::new(analysis.get_tokens())
            .save(&first_path)
            .unwrap();

        let analysis = get_sample_analysis();
        TransitionDiagram::new(analysis.get_tokens())
            .save(&second_path)
            .unwrap();

        let first = fs::read(&first_path).unwrap();
        let second = fs::read(&second_path).unwrap();

        fs::remove_file(&first_path).unwrap();
        fs::remove_file(&second_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_operator_split_mode() {
        let analysis = analyze("if x>=10 return y", SplitMode::Operators);

        let expected_list = vec![
            get_pair("if", Category::Keyword),
            get_pair("x", Category::Identifier),
            get_pair(">=", Category::RelationalOperator),
            get_pair("10", Category::UnsignedNumber),
            get_pair("return", Category::Keyword),
            get_pair("y", Category::Identifier),
        ];

        assert_eq!(get_pairs(&analysis), expected_list);
    }

    #[test]
    fn test_anything_is_accepted() {
        let analysis = analyze("@@ ## \u{1F600} ;;; ñ 0x1F", SplitMode::Delimited);

        assert_eq!(analysis.get_tokens().len(), 5);
        assert!(analysis
            .get_tokens()
            .iter()
            .all(|token| token.get_category() == Category::Invalid));
        assert_eq!(analysis.get_counts().keywords, 0);
        assert_eq!(analysis.get_counts().identifiers, 0);
    }
}
