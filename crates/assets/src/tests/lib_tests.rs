use super::*;

const BASES: &[&str] = &[
    "",
    "/",
    "//",
    "/delphi-pascal-llvm-compiler",
    "/delphi-pascal-llvm-compiler/",
    "/delphi-pascal-llvm-compiler///",
    "docs",
    "/a/b/c/",
];

const RELATIVES: &[&str] = &[
    "",
    "artifacts/test1.ll",
    "/artifacts/test1.ll",
    "//artifacts/test1.ll",
    "samples/test2",
];

#[test]
fn resolves_against_site_root() {
    assert_eq!(resolve("/", "artifacts/test1.ll"), "/artifacts/test1.ll");
}

#[test]
fn resolves_against_project_sub_path() {
    assert_eq!(
        resolve("/delphi-pascal-llvm-compiler/", "artifacts/test1.ll"),
        "/delphi-pascal-llvm-compiler/artifacts/test1.ll"
    );
    assert_eq!(
        resolve("/delphi-pascal-llvm-compiler", "/artifacts/test1.ll"),
        "/delphi-pascal-llvm-compiler/artifacts/test1.ll"
    );
}

#[test]
fn empty_base_is_treated_as_root() {
    assert_eq!(resolve("", "artifacts/test1.ll"), "/artifacts/test1.ll");
    assert_eq!(normalize_base_path(""), "/");
}

#[test]
fn only_one_leading_slash_is_stripped() {
    assert_eq!(resolve("/", "//artifacts/test1.ll"), "//artifacts/test1.ll");
    assert_eq!(resolve("/base", "//x.ll"), "/base//x.ll");
}

#[test]
fn trailing_slashes_on_base_collapse_to_one() {
    assert_eq!(normalize_base_path("/site///"), "/site/");
    assert_eq!(normalize_base_path("///"), "/");
    assert_eq!(resolve("/site//", "a.ll"), "/site/a.ll");
}

#[test]
fn relative_base_stays_relative() {
    assert_eq!(resolve("docs", "artifacts/test1.ll"), "docs/artifacts/test1.ll");
}

#[test]
fn normalization_is_idempotent() {
    for base in BASES {
        let once = normalize_base_path(base);
        assert_eq!(normalize_base_path(&once), once, "base {base:?}");
        for relative in RELATIVES {
            assert_eq!(
                resolve(&once, relative),
                resolve(base, relative),
                "base {base:?} relative {relative:?}"
            );
        }
    }
}

#[test]
fn resolve_never_adds_a_host() {
    for base in BASES {
        for relative in RELATIVES {
            assert!(!resolve(base, relative).contains("://"));
        }
    }
}

#[test]
fn deploy_mode_selects_default_base_path() {
    assert_eq!(DeployMode::Development.default_base_path(), "/");
    assert_eq!(
        DeployMode::Production.default_base_path(),
        "/delphi-pascal-llvm-compiler/"
    );
    assert_eq!(DeployMode::default(), DeployMode::Development);
}

#[test]
fn deploy_mode_parses_short_and_long_names() {
    assert_eq!("production".parse::<DeployMode>(), Ok(DeployMode::Production));
    assert_eq!(" Prod ".parse::<DeployMode>(), Ok(DeployMode::Production));
    assert_eq!("dev".parse::<DeployMode>(), Ok(DeployMode::Development));
    assert!(matches!(
        "staging".parse::<DeployMode>(),
        Err(ShowcaseError::InvalidDeployMode(_))
    ));
}

#[test]
fn deployment_context_holds_normalized_base() {
    let context = DeploymentContext::new("/delphi-pascal-llvm-compiler").expect("context");
    assert_eq!(context.base_path(), "/delphi-pascal-llvm-compiler/");
    assert_eq!(
        context.resolve("/artifacts/test6.ll"),
        "/delphi-pascal-llvm-compiler/artifacts/test6.ll"
    );
    assert!(!context.is_root());

    let root = DeploymentContext::new("").expect("context");
    assert!(root.is_root());
    assert_eq!(root, DeploymentContext::root());
    assert_eq!(
        DeploymentContext::for_mode(DeployMode::Production).base_path(),
        PROJECT_BASE_PATH
    );
}

#[test]
fn deployment_context_rejects_malformed_base_paths() {
    for bad in [
        "https://example.com/site/",
        "//cdn.example.com/",
        "/site/?v=1",
        "/site/#top",
        "/my site/",
        "/my*site/",
        "/a:b/",
        ":site",
    ] {
        let err = DeploymentContext::new(bad).expect_err(bad);
        assert!(
            matches!(err, ShowcaseError::InvalidBasePath { .. }),
            "unexpected error for {bad:?}: {err}"
        );
    }
}
