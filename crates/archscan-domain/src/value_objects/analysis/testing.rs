use serde::{Deserialize, Serialize};

tag_enum! {
    pub enum TestFramework {
        Jest => "jest",
        Vitest => "vitest",
        Mocha => "mocha",
    }
}

tag_enum! {
    pub enum TestType {
        E2e => "e2e",
        Integration => "integration",
        Unit => "unit",
        Unknown => "unknown",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFile {
    pub path: String,
    #[serde(rename = "type")]
    pub test_type: TestType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAnalysis {
    pub framework: Option<TestFramework>,
    pub test_files: Vec<TestFile>,
    pub has_coverage_config: bool,
}

impl TestAnalysis {
    /// Number of test files of the given type
    pub fn count_of(&self, test_type: TestType) -> usize {
        self.test_files
            .iter()
            .filter(|file| file.test_type == test_type)
            .count()
    }
}
