//! Dependency classifier
//!
//! Reads `package.json` and `requirements.txt` from the content map. Other
//! ecosystems' manifests are fetched but not parsed yet. Entries from
//! different manifests are never merged.

use std::sync::LazyLock;

use archscan_domain::constants::{PACKAGE_JSON_PATH, REQUIREMENTS_TXT_PATH};
use archscan_domain::{
    Dependency, DependencyAnalysis, DependencyCategory, DependencyKind, FileContentMap,
    PackageManager,
};
use regex::Regex;
use tracing::{debug, warn};

use super::manifest::{PackageManifest, version_of};
use super::{pattern, push_unique};

static FRAMEWORK: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^(@nestjs/|@angular/|@remix-run/)|^(express|fastify|koa|hapi|@hapi/hapi|next|nuxt|react|vue|svelte|@sveltejs/kit|gatsby|django|flask|fastapi|starlette|tornado|sanic)$",
    )
});
static DATABASE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"prisma|mongoose|sequelize|typeorm|knex|drizzle|mongo|mysql|sqlite|^pg$|^pg-|postgres|psycopg|redis|sqlalchemy|supabase|firebase|dynamo|cassandra",
    )
});
static TESTING: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"jest|vitest|mocha|chai|jasmine|karma|cypress|playwright|puppeteer|@testing-library/|supertest|sinon|^ava$|pytest|^nose|hypothesis",
    )
});
static UI_LIBRARY: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^(@mui/|@material-ui/|@chakra-ui/|@radix-ui/|@headlessui/|@emotion/)|^(antd|tailwindcss|bootstrap|styled-components|framer-motion|lucide-react|react-icons)$",
    )
});
static BUILD_TOOL: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"^(@vitejs/|@swc/)|^(webpack|webpack-cli|vite|rollup|esbuild|parcel|turbo|tsup|@babel/core|babel-loader|typescript|setuptools|poetry|wheel)$",
    )
});
/// `name[extras] (==|>=|<=|~=) version`
static REQUIREMENT: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^([A-Za-z0-9][A-Za-z0-9_.\-]*)(?:\[[^\]]*\])?\s*(?:(?:==|>=|<=|~=)\s*([^\s;#,]+))?")
});

const LATEST_VERSION: &str = "latest";

/// Classify declared dependencies
pub fn classify_dependencies(contents: &FileContentMap) -> DependencyAnalysis {
    let mut package_manager = None;
    let mut dependencies = Vec::new();

    match PackageManifest::from_contents(contents) {
        Some(Ok(manifest)) => {
            package_manager = Some(package_manager_of(&manifest));
            dependencies.extend(package_json_dependencies(&manifest));
        }
        Some(Err(err)) => {
            warn!(path = PACKAGE_JSON_PATH, error = %err, "Skipping malformed manifest");
        }
        None => {}
    }

    if let Some(raw) = contents.get(REQUIREMENTS_TXT_PATH) {
        package_manager.get_or_insert(PackageManager::Pip);
        dependencies.extend(requirements_dependencies(raw));
    }

    let analysis = summarize(package_manager, dependencies);
    debug!(
        dependencies = analysis.dependencies.len(),
        frameworks = ?analysis.frameworks,
        "Dependencies classified"
    );
    analysis
}

/// `dependencies` are runtime; `devDependencies` not already declared as runtime are dev
fn package_json_dependencies(manifest: &PackageManifest) -> Vec<Dependency> {
    let runtime = manifest
        .runtime()
        .map(|(name, version)| dependency(name, version_of(version), DependencyKind::Runtime));

    let dev = manifest
        .dev()
        .filter(|(name, _)| {
            !manifest
                .dependencies
                .as_ref()
                .is_some_and(|deps| deps.contains_key(*name))
        })
        .map(|(name, version)| dependency(name, version_of(version), DependencyKind::Dev));

    runtime.chain(dev).collect()
}

/// `packageManager: "pnpm@8.15.0"` refines the default npm tag
fn package_manager_of(manifest: &PackageManifest) -> PackageManager {
    let declared = manifest
        .package_manager
        .as_deref()
        .and_then(|spec| spec.split('@').next())
        .unwrap_or_default();
    match declared {
        "yarn" => PackageManager::Yarn,
        "pnpm" => PackageManager::Pnpm,
        "bun" => PackageManager::Bun,
        _ => PackageManager::Npm,
    }
}

/// One runtime entry per parseable requirement line
pub fn requirements_dependencies(raw: &str) -> Vec<Dependency> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| REQUIREMENT.captures(line))
        .map(|caps| {
            let version = caps
                .get(2)
                .map_or_else(|| LATEST_VERSION.to_string(), |m| m.as_str().to_string());
            dependency(&caps[1], version, DependencyKind::Runtime)
        })
        .collect()
}

fn dependency(name: &str, version: String, kind: DependencyKind) -> Dependency {
    Dependency {
        name: name.to_string(),
        version,
        kind,
        category: categorize(name),
    }
}

/// framework > database > testing > ui > utility
pub fn categorize(name: &str) -> DependencyCategory {
    let name = name.to_lowercase();
    if FRAMEWORK.is_match(&name) {
        DependencyCategory::Framework
    } else if DATABASE.is_match(&name) {
        DependencyCategory::Database
    } else if TESTING.is_match(&name) {
        DependencyCategory::Testing
    } else if UI_LIBRARY.is_match(&name) {
        DependencyCategory::Ui
    } else {
        DependencyCategory::Utility
    }
}

/// Derived lists use the raw tests, so one name can appear in several
fn summarize(
    package_manager: Option<PackageManager>,
    dependencies: Vec<Dependency>,
) -> DependencyAnalysis {
    let mut analysis = DependencyAnalysis {
        package_manager,
        ..DependencyAnalysis::default()
    };

    for dep in &dependencies {
        let name = dep.name.to_lowercase();
        if FRAMEWORK.is_match(&name) {
            push_unique(&mut analysis.frameworks, dep.name.clone());
        }
        if DATABASE.is_match(&name) {
            push_unique(&mut analysis.databases, dep.name.clone());
        }
        if TESTING.is_match(&name) {
            push_unique(&mut analysis.testing, dep.name.clone());
        }
        if BUILD_TOOL.is_match(&name) {
            push_unique(&mut analysis.build_tools, dep.name.clone());
        }
    }

    analysis.dependencies = dependencies;
    analysis
}
