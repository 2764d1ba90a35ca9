use serde::{Deserialize, Serialize};

tag_enum! {
    pub enum IacTool {
        Terraform => "terraform",
        Pulumi => "pulumi",
    }
}

tag_enum! {
    pub enum CiCdPlatform {
        GithubActions => "github-actions",
        GitlabCi => "gitlab-ci",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerizationInfo {
    pub has_docker: bool,
    pub dockerfiles: Vec<String>,
    pub has_compose: bool,
    pub compose_files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrationInfo {
    pub has_kubernetes: bool,
    pub manifests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IacInfo {
    pub tool: Option<IacTool>,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiCdInfo {
    pub platform: Option<CiCdPlatform>,
    pub workflows: Vec<String>,
}

/// Cloud provider placeholder. Detection is not implemented, so this is
/// always `provider: None` with no services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudInfo {
    pub provider: Option<String>,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfrastructureAnalysis {
    pub containerization: ContainerizationInfo,
    pub orchestration: OrchestrationInfo,
    pub iac: IacInfo,
    pub cicd: CiCdInfo,
    pub cloud: CloudInfo,
}
