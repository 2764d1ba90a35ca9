//! Database, API, infrastructure, environment, test and messaging classifiers

use archscan_application::classifiers::testing::test_type_of;
use archscan_application::classifiers::{
    classify_apis, classify_database, classify_environment, classify_infrastructure,
    classify_messaging, classify_tests,
};
use archscan_application::content_selection::{is_allow_listed, select_content_paths};
use archscan_domain::{
    ApiStyle, CiCdPlatform, DatabaseEngine, FileContentMap, IacTool, MessagingPattern,
    MessagingSystem, Orm, RepoTreeEntry, TestFramework, TestType,
};

fn blob(path: &str) -> RepoTreeEntry {
    RepoTreeEntry::blob(path, Some(1))
}

fn dir(path: &str) -> RepoTreeEntry {
    RepoTreeEntry::tree(path)
}

fn contents(entries: &[(&str, &str)]) -> FileContentMap {
    entries
        .iter()
        .map(|(path, raw)| ((*path).to_string(), (*raw).to_string()))
        .collect()
}

const PRISMA_SCHEMA: &str = r#"
generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model User {
  id    Int    @id
  posts Post[]
}

model Post {
  id       Int  @id
  authorId Int
}
"#;

#[test]
fn test_prisma_schema() {
    let tree = vec![dir("prisma"), blob("prisma/schema.prisma")];
    let map = contents(&[("prisma/schema.prisma", PRISMA_SCHEMA)]);

    let analysis = classify_database(&tree, &map);
    assert_eq!(analysis.engine, Some(DatabaseEngine::Postgresql));
    assert_eq!(analysis.orm, Some(Orm::Prisma));
    assert_eq!(analysis.schemas.len(), 1);
    assert_eq!(analysis.schemas[0].models, vec!["User", "Post"]);
    assert_eq!(analysis.schemas[0].content, PRISMA_SCHEMA);
}

#[test]
fn test_missing_schema_content_is_no_signal() {
    let tree = vec![dir("prisma"), blob("prisma/schema.prisma")];
    let analysis = classify_database(&tree, &FileContentMap::new());

    assert_eq!(analysis.engine, None);
    assert_eq!(analysis.orm, None);
    assert!(analysis.schemas.is_empty());
}

#[test]
fn test_migration_folders() {
    let tree = vec![
        dir("db"),
        dir("db/migrations"),
        blob("db/migrations/001_init.sql"),
        blob("db/migrations/002_users.SQL"),
        blob("db/migrations/README.md"),
        dir("src/migration"),
    ];
    let analysis = classify_database(&tree, &FileContentMap::new());

    assert_eq!(analysis.migrations.len(), 2);
    assert_eq!(analysis.migrations[0].folder, "db/migrations");
    assert_eq!(analysis.migrations[0].file_count, 2);
    assert_eq!(analysis.migrations[1].file_count, 0);
}

#[test]
fn test_api_styles_are_independent() {
    let tree = vec![
        dir("src/routes"),
        blob("src/routes/users.ts"),
        blob("schema/schema.graphql"),
        blob("proto/orders.proto"),
        blob("docs/openapi.yaml"),
        blob("src/index.ts"),
    ];
    let analysis = classify_apis(&tree);

    assert_eq!(
        analysis.styles,
        vec![ApiStyle::Rest, ApiStyle::GraphQl, ApiStyle::Grpc]
    );
    assert_eq!(
        analysis.route_files,
        vec![
            "src/routes/users.ts",
            "schema/schema.graphql",
            "proto/orders.proto"
        ]
    );
    assert_eq!(analysis.schemas.len(), 1);
    assert_eq!(analysis.schemas[0].file, "docs/openapi.yaml");
    assert!(analysis.endpoints.is_empty());
}

#[test]
fn test_no_api_signal() {
    let analysis = classify_apis(&[blob("src/main.rs")]);
    assert!(analysis.styles.is_empty());
    assert!(analysis.route_files.is_empty());
}

#[test]
fn test_infrastructure_scans() {
    let tree = vec![
        blob("Dockerfile"),
        blob("services/api/Dockerfile.dev"),
        blob("docker-compose.yml"),
        blob("deploy/k8s/deployment.yaml"),
        blob("infra/main.tf"),
        blob("infra/Pulumi.yaml"),
        blob(".github/workflows/ci.yml"),
        blob(".gitlab-ci.yml"),
    ];
    let analysis = classify_infrastructure(&tree);

    assert!(analysis.containerization.has_docker);
    assert_eq!(analysis.containerization.dockerfiles.len(), 2);
    assert!(analysis.containerization.has_compose);
    assert!(analysis.orchestration.has_kubernetes);
    assert_eq!(analysis.iac.tool, Some(IacTool::Terraform));
    assert_eq!(analysis.iac.files, vec!["infra/main.tf"]);
    assert_eq!(analysis.cicd.platform, Some(CiCdPlatform::GithubActions));
    assert_eq!(analysis.cicd.workflows, vec![".github/workflows/ci.yml"]);
    assert_eq!(analysis.cloud.provider, None);
}

#[test]
fn test_pulumi_and_gitlab_fallbacks() {
    let tree = vec![dir("pulumi"), blob("pulumi/index.ts"), blob(".gitlab-ci.yml")];
    let analysis = classify_infrastructure(&tree);

    assert_eq!(analysis.iac.tool, Some(IacTool::Pulumi));
    assert_eq!(analysis.cicd.platform, Some(CiCdPlatform::GitlabCi));
    assert_eq!(analysis.cicd.workflows, vec![".gitlab-ci.yml"]);
    assert!(!analysis.containerization.has_docker);
}

#[test]
fn test_environment_variables_and_hints() {
    let tree = vec![blob(".env.example"), blob("api/.env")];
    let map = contents(&[
        (
            ".env.example",
            "# comment\nDATABASE_URL=postgres://\nREDIS_HOST=localhost\nSTRIPE_KEY=\nlower=1\n",
        ),
        ("api/.env", "export SENDGRID_API_KEY=x\nDATABASE_URL=dup\n"),
    ]);
    let analysis = classify_environment(&tree, &map);

    assert_eq!(analysis.env_files, vec![".env.example", "api/.env"]);
    let names: Vec<&str> = analysis.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["DATABASE_URL", "REDIS_HOST", "STRIPE_KEY", "SENDGRID_API_KEY"]
    );
    assert!(analysis.variables.iter().all(|v| v.required));
    assert_eq!(analysis.services, vec!["database", "redis"]);
    assert_eq!(analysis.integrations, vec!["stripe", "email"]);
}

#[test]
fn test_env_file_without_content_lists_file_only() {
    let analysis = classify_environment(&[blob(".env.sample")], &FileContentMap::new());
    assert_eq!(analysis.env_files, vec![".env.sample"]);
    assert!(analysis.variables.is_empty());
}

#[test]
fn test_test_files_and_framework() {
    let tree = vec![
        blob("tests/e2e/login.spec.ts"),
        blob("tests/integration/db.test.js"),
        blob("src/unit/math.test.ts"),
        blob("src/util.test.tsx"),
        blob("src/util.ts"),
        blob("vitest.config.ts"),
    ];
    let map = contents(&[(
        "package.json",
        r#"{"devDependencies": {"vitest": "1.0.0", "mocha": "10.0.0"}}"#,
    )]);
    let analysis = classify_tests(&tree, &map);

    assert_eq!(analysis.framework, Some(TestFramework::Vitest));
    assert_eq!(analysis.test_files.len(), 4);
    assert_eq!(analysis.count_of(TestType::E2e), 1);
    assert_eq!(analysis.count_of(TestType::Integration), 1);
    assert_eq!(analysis.count_of(TestType::Unit), 1);
    assert_eq!(analysis.count_of(TestType::Unknown), 1);
    assert!(analysis.has_coverage_config);
}

#[test]
fn test_test_type_is_plain_substring_match() {
    assert_eq!(test_type_of("src/community/a.test.ts"), TestType::Unit);
    assert_eq!(test_type_of("src/Integrations/stripe.spec.ts"), TestType::Integration);
    assert_eq!(test_type_of("tests/E2E/unit-flow.spec.ts"), TestType::E2e);
    assert_eq!(test_type_of("src/math.test.ts"), TestType::Unknown);
}

#[test]
fn test_ioredis_alone_is_not_messaging() {
    let tree = vec![blob("src/cache.ts")];
    let map = contents(&[("package.json", r#"{"dependencies": {"ioredis": "5.0.0"}}"#)]);
    let analysis = classify_messaging(&tree, &map);

    assert!(!analysis.has_messaging);
    assert!(analysis.systems.is_empty());
    assert!(analysis.files.is_empty());
}

#[test]
fn test_keyword_inside_file_name_is_not_a_segment() {
    let tree = vec![
        blob("package.json"),
        blob("src/EventCard.tsx"),
        blob("src/components/MessageList.tsx"),
    ];
    let map = contents(&[("package.json", r#"{"dependencies": {"ioredis": "5"}}"#)]);
    let analysis = classify_messaging(&tree, &map);

    assert!(!analysis.has_messaging);
    assert!(analysis.systems.is_empty());
    assert!(analysis.files.is_empty());
}

#[test]
fn test_messaging_segments_match_case_insensitively() {
    let tree = vec![blob("src/Events/user_created.ts"), blob("kafka/consumer.ts")];
    let analysis = classify_messaging(&tree, &FileContentMap::new());

    assert!(analysis.has_messaging);
    assert_eq!(
        analysis.files,
        vec!["src/Events/user_created.ts", "kafka/consumer.ts"]
    );
}

#[test]
fn test_ioredis_with_messaging_paths() {
    let tree = vec![
        blob("src/queues/email.ts"),
        blob("src/pubsub/notifications.ts"),
    ];
    let map = contents(&[(
        "package.json",
        r#"{"dependencies": {"ioredis": "5.0.0", "kafkajs": "2.0.0"}}"#,
    )]);
    let analysis = classify_messaging(&tree, &map);

    assert!(analysis.has_messaging);
    assert_eq!(
        analysis.systems,
        vec![MessagingSystem::Kafka, MessagingSystem::Redis]
    );
    assert_eq!(
        analysis.patterns,
        vec![MessagingPattern::Queue, MessagingPattern::PubSub]
    );
}

#[test]
fn test_allow_list() {
    for path in [
        "package.json",
        "apps/web/package.json",
        "requirements.txt",
        "prisma/schema.prisma",
        ".env.example",
        "Dockerfile",
        "docker/Dockerfile.prod",
        "docker-compose.override.yaml",
        "docs/openapi.json",
        "api/schema.graphql",
        "proto/user.proto",
    ] {
        assert!(is_allow_listed(path), "path: {path}");
    }
    for path in ["src/index.ts", "README.md", "package-lock.json", "logo.png"] {
        assert!(!is_allow_listed(path), "path: {path}");
    }
}

#[test]
fn test_selection_cap_is_deterministic() {
    let tree: Vec<RepoTreeEntry> = (0..200)
        .map(|i| blob(&format!("packages/p{i:03}/package.json")))
        .collect();

    let first = select_content_paths(&tree);
    let second = select_content_paths(&tree);
    assert_eq!(first.len(), 50);
    assert_eq!(first, second);
    assert_eq!(first[0], "packages/p000/package.json");
    assert_eq!(first[49], "packages/p049/package.json");
}
