//! Infrastructure classifier
//!
//! Six structural scans with presence precedence for the tool tags.
//! Cloud provider detection is not implemented and always reports nothing.

use std::sync::LazyLock;

use archscan_domain::{
    CiCdInfo, CiCdPlatform, CloudInfo, ContainerizationInfo, IacInfo, IacTool,
    InfrastructureAnalysis, OrchestrationInfo, RepoTreeEntry,
};
use regex::Regex;

use super::pattern;

static COMPOSE_FILE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^docker-compose[^/]*\.ya?ml$"));
static KUBERNETES_PATH: LazyLock<Regex> = LazyLock::new(|| pattern(r"(^|/)(k8s|kubernetes)/"));
static TERRAFORM_FILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\.tf$"));
static PULUMI_PATH: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)pulumi"));
static GITHUB_WORKFLOW: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^\.github/workflows/[^/]+\.ya?ml$"));

const GITLAB_CI_FILE: &str = ".gitlab-ci.yml";

/// Classify containerization, orchestration, IaC and CI/CD
pub fn classify_infrastructure(tree: &[RepoTreeEntry]) -> InfrastructureAnalysis {
    let dockerfiles = blob_paths(tree, |entry| entry.file_name().starts_with("Dockerfile"));
    let compose_files = blob_paths(tree, |entry| COMPOSE_FILE.is_match(entry.file_name()));
    let manifests = blob_paths(tree, |entry| KUBERNETES_PATH.is_match(&entry.path));
    let terraform_files = blob_paths(tree, |entry| TERRAFORM_FILE.is_match(&entry.path));
    let workflows = blob_paths(tree, |entry| GITHUB_WORKFLOW.is_match(&entry.path));
    let has_gitlab_ci = tree
        .iter()
        .any(|entry| entry.is_blob() && entry.path == GITLAB_CI_FILE);

    let iac = if !terraform_files.is_empty() {
        IacInfo {
            tool: Some(IacTool::Terraform),
            files: terraform_files,
        }
    } else {
        let pulumi_files = blob_paths(tree, |entry| PULUMI_PATH.is_match(&entry.path));
        let pulumi_dirs = tree
            .iter()
            .any(|entry| entry.is_tree() && PULUMI_PATH.is_match(&entry.path));
        IacInfo {
            tool: (!pulumi_files.is_empty() || pulumi_dirs).then_some(IacTool::Pulumi),
            files: pulumi_files,
        }
    };

    let cicd = if !workflows.is_empty() {
        CiCdInfo {
            platform: Some(CiCdPlatform::GithubActions),
            workflows,
        }
    } else if has_gitlab_ci {
        CiCdInfo {
            platform: Some(CiCdPlatform::GitlabCi),
            workflows: vec![GITLAB_CI_FILE.to_string()],
        }
    } else {
        CiCdInfo::default()
    };

    InfrastructureAnalysis {
        containerization: ContainerizationInfo {
            has_docker: !dockerfiles.is_empty(),
            dockerfiles,
            has_compose: !compose_files.is_empty(),
            compose_files,
        },
        orchestration: OrchestrationInfo {
            has_kubernetes: !manifests.is_empty(),
            manifests,
        },
        iac,
        cicd,
        cloud: CloudInfo::default(),
    }
}

fn blob_paths(tree: &[RepoTreeEntry], keep: impl Fn(&RepoTreeEntry) -> bool) -> Vec<String> {
    tree.iter()
        .filter(|entry| entry.is_blob() && keep(entry))
        .map(|entry| entry.path.clone())
        .collect()
}
