//! Prompt formatter
//!
//! Renders an analysis as the markdown-like context block handed to the
//! diagram-generation model. Output depends only on its inputs. Section
//! order and labels are part of the downstream prompt contract; change them
//! deliberately.

use std::fmt::Display;

use archscan_domain::{RepoIdentity, RepositoryAnalysis, TestType};

const NONE_DETECTED: &str = "None detected";

/// Longest list rendered inline before eliding the rest
const MAX_LISTED_ITEMS: usize = 15;

/// Render `analysis` as prompt text
pub fn format_analysis_as_prompt(repo: &RepoIdentity, analysis: &RepositoryAnalysis) -> String {
    let mut out = PromptWriter::default();

    out.heading(1, &format!("Repository Analysis: {repo}"));
    write_overview(&mut out, analysis);
    write_architecture(&mut out, analysis);
    write_dependencies(&mut out, analysis);
    write_database(&mut out, analysis);
    write_apis(&mut out, analysis);
    write_infrastructure(&mut out, analysis);
    write_environment(&mut out, analysis);
    write_tests(&mut out, analysis);
    write_messaging(&mut out, analysis);

    out.finish()
}

fn write_overview(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let meta = &analysis.metadata;
    out.heading(2, "Overview");
    out.field("Name", &meta.name);
    out.field("Description", meta.description.as_deref().unwrap_or("None"));
    out.field("Primary Language", meta.language.as_deref().unwrap_or("Unknown"));
    let languages: Vec<String> = meta
        .language_shares()
        .into_iter()
        .map(|(lang, share)| format!("{lang} ({share:.1}%)"))
        .collect();
    out.list_field("Languages", &languages);
    out.list_field("Topics", &meta.topics);
    out.field("Stars", meta.stars);
    out.field("Forks", meta.forks);
    out.field("Default Branch", &meta.default_branch);
    out.field("License", meta.license.as_deref().unwrap_or("None"));
}

fn write_architecture(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let arch = &analysis.architecture;
    out.heading(2, "Architecture");
    out.field("Pattern", arch.pattern);
    out.field("Organization", arch.organization);
    out.field("Naming Convention", arch.naming_convention);
    out.field(
        "Structure",
        format!(
            "services={}, modules={}, layers={}, domains={}",
            yes_no(arch.structure.has_services),
            yes_no(arch.structure.has_modules),
            yes_no(arch.structure.has_layers),
            yes_no(arch.structure.has_domains),
        ),
    );
    let folders: Vec<String> = arch
        .folders
        .iter()
        .map(|folder| format!("{} ({})", folder.path, folder.purpose))
        .collect();
    out.nested_list("Key Folders", &folders);
}

fn write_dependencies(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let deps = &analysis.dependencies;
    out.heading(2, "Dependencies");
    out.optional_field("Package Manager", deps.package_manager);
    out.list_field("Frameworks", &deps.frameworks);
    out.list_field("Databases", &deps.databases);
    out.list_field("Testing", &deps.testing);
    out.list_field("Build Tools", &deps.build_tools);
    let runtime = deps
        .dependencies
        .iter()
        .filter(|dep| dep.kind == archscan_domain::DependencyKind::Runtime)
        .count();
    out.field(
        "Total Dependencies",
        format!(
            "{} ({} runtime, {} dev)",
            deps.dependencies.len(),
            runtime,
            deps.dependencies.len() - runtime
        ),
    );
}

fn write_database(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let db = &analysis.database;
    out.heading(2, "Database");
    out.optional_field("Type", db.engine);
    out.optional_field("ORM", db.orm);
    let models: Vec<String> = db
        .schemas
        .iter()
        .flat_map(|schema| schema.models.iter().cloned())
        .collect();
    out.list_field("Models", &models);
    let migrations: Vec<String> = db
        .migrations
        .iter()
        .map(|m| format!("{} ({} files)", m.folder, m.file_count))
        .collect();
    out.list_field("Migrations", &migrations);
}

fn write_apis(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let apis = &analysis.apis;
    out.heading(2, "APIs");
    let styles: Vec<&str> = apis.styles.iter().map(|style| style.as_str()).collect();
    out.list_field("Styles", &styles);
    out.nested_list("Route Files", &apis.route_files);
    let schemas: Vec<String> = apis
        .schemas
        .iter()
        .map(|schema| format!("{} ({})", schema.file, schema.schema_type))
        .collect();
    out.list_field("API Specs", &schemas);
}

fn write_infrastructure(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let infra = &analysis.infrastructure;
    out.heading(2, "Infrastructure");
    out.presence_field(
        "Docker",
        infra.containerization.has_docker,
        &infra.containerization.dockerfiles,
    );
    out.presence_field(
        "Docker Compose",
        infra.containerization.has_compose,
        &infra.containerization.compose_files,
    );
    out.presence_field(
        "Kubernetes",
        infra.orchestration.has_kubernetes,
        &infra.orchestration.manifests,
    );
    match infra.iac.tool {
        Some(tool) => out.field("IaC", format!("{tool} ({} files)", infra.iac.files.len())),
        None => out.field("IaC", NONE_DETECTED),
    }
    match infra.cicd.platform {
        Some(platform) => out.field(
            "CI/CD",
            format!("{platform} ({})", joined(&infra.cicd.workflows)),
        ),
        None => out.field("CI/CD", NONE_DETECTED),
    }
    out.optional_field("Cloud Provider", infra.cloud.provider.as_deref());
}

fn write_environment(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let env = &analysis.environment;
    out.heading(2, "Environment");
    out.list_field("Env Files", &env.env_files);
    let names: Vec<&str> = env.variables.iter().map(|var| var.name.as_str()).collect();
    out.list_field("Variables", &names);
    out.list_field("Services", &env.services);
    out.list_field("Integrations", &env.integrations);
}

fn write_tests(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let tests = &analysis.tests;
    out.heading(2, "Tests");
    out.optional_field("Framework", tests.framework);
    out.field(
        "Test Files",
        format!(
            "{} (unit: {}, integration: {}, e2e: {})",
            tests.test_files.len(),
            tests.count_of(TestType::Unit),
            tests.count_of(TestType::Integration),
            tests.count_of(TestType::E2e),
        ),
    );
    out.field("Coverage Config", yes_no(tests.has_coverage_config));
}

fn write_messaging(out: &mut PromptWriter, analysis: &RepositoryAnalysis) {
    let messaging = &analysis.messaging;
    out.heading(2, "Messaging");
    out.field("Uses Messaging", yes_no(messaging.has_messaging));
    let systems: Vec<&str> = messaging.systems.iter().map(|s| s.as_str()).collect();
    out.list_field("Systems", &systems);
    let patterns: Vec<&str> = messaging.patterns.iter().map(|p| p.as_str()).collect();
    out.list_field("Patterns", &patterns);
    out.nested_list("Files", &messaging.files);
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Comma-joined, elided past [`MAX_LISTED_ITEMS`]
fn joined<T: AsRef<str>>(items: &[T]) -> String {
    let mut text = items
        .iter()
        .take(MAX_LISTED_ITEMS)
        .map(|item| item.as_ref())
        .collect::<Vec<&str>>()
        .join(", ");
    if items.len() > MAX_LISTED_ITEMS {
        text.push_str(&format!(", ... and {} more", items.len() - MAX_LISTED_ITEMS));
    }
    text
}

#[derive(Default)]
struct PromptWriter {
    buf: String,
}

impl PromptWriter {
    fn heading(&mut self, level: usize, title: &str) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        self.buf.push_str(&"#".repeat(level));
        self.buf.push(' ');
        self.buf.push_str(title);
        self.buf.push_str("\n\n");
    }

    fn field(&mut self, label: &str, value: impl Display) {
        self.buf.push_str(&format!("- {label}: {value}\n"));
    }

    fn optional_field(&mut self, label: &str, value: Option<impl Display>) {
        match value {
            Some(value) => self.field(label, value),
            None => self.field(label, NONE_DETECTED),
        }
    }

    fn list_field<T: AsRef<str>>(&mut self, label: &str, items: &[T]) {
        if items.is_empty() {
            self.field(label, NONE_DETECTED);
        } else {
            self.field(label, joined(items));
        }
    }

    fn presence_field<T: AsRef<str>>(&mut self, label: &str, present: bool, files: &[T]) {
        if present {
            self.field(label, format!("Yes ({})", joined(files)));
        } else {
            self.field(label, "No");
        }
    }

    fn nested_list<T: AsRef<str>>(&mut self, label: &str, items: &[T]) {
        if items.is_empty() {
            self.field(label, NONE_DETECTED);
            return;
        }
        self.buf.push_str(&format!("- {label}:\n"));
        for item in items.iter().take(MAX_LISTED_ITEMS) {
            self.buf.push_str(&format!("  - {}\n", item.as_ref()));
        }
        if items.len() > MAX_LISTED_ITEMS {
            self.buf.push_str(&format!(
                "  - ... and {} more\n",
                items.len() - MAX_LISTED_ITEMS
            ));
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}
