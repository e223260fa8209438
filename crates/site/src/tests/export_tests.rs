use super::*;

fn builtin() -> Arc<Registry> {
    Arc::new(Registry::builtin().expect("builtin"))
}

#[test]
fn writes_index_and_one_page_per_sample() {
    let out = tempfile::tempdir().expect("out dir");
    let public = tempfile::tempdir().expect("public dir");

    let report = export_site(
        builtin(),
        DeploymentContext::new("/delphi-pascal-llvm-compiler/").expect("context"),
        public.path(),
        out.path(),
    )
    .expect("export");

    assert_eq!(report.pages.len(), 7);
    let index = fs::read_to_string(out.path().join("index.html")).expect("index");
    assert!(index.contains("<h3>FOR-DO loop 1..5</h3>"));

    let test5 = fs::read_to_string(out.path().join("samples/test5/index.html")).expect("page");
    assert!(test5.contains("<h3>IF / ELSE</h3>"));
    assert!(test5.contains("href=\"/delphi-pascal-llvm-compiler/artifacts/test5.ll\""));
    assert!(test5.contains("href=\"/delphi-pascal-llvm-compiler/samples/test1/\""));
}

#[test]
fn copies_public_artifacts_next_to_pages() {
    let out = tempfile::tempdir().expect("out dir");
    let public = tempfile::tempdir().expect("public dir");
    fs::create_dir_all(public.path().join("artifacts")).expect("artifacts dir");
    fs::write(
        public.path().join("artifacts/test1.ll"),
        "define i32 @main() {\nentry:\nret i32 0\n}\n",
    )
    .expect("artifact");

    let report = export_site(
        builtin(),
        DeploymentContext::root(),
        public.path(),
        out.path(),
    )
    .expect("export");

    assert_eq!(report.copied_assets, 1);
    let copied = fs::read_to_string(out.path().join("artifacts/test1.ll")).expect("copied");
    assert!(copied.starts_with("define i32 @main()"));
}

#[test]
fn missing_public_dir_still_exports_pages() {
    let out = tempfile::tempdir().expect("out dir");
    let report = export_site(
        builtin(),
        DeploymentContext::root(),
        &out.path().join("no-such-public"),
        &out.path().join("site"),
    )
    .expect("export");

    assert_eq!(report.copied_assets, 0);
    assert!(out.path().join("site/samples/test6/index.html").exists());
}

#[test]
fn exporting_into_the_public_dir_fails_without_touching_artifacts() {
    let dir = tempfile::tempdir().expect("dir");
    fs::create_dir_all(dir.path().join("artifacts")).expect("artifacts dir");
    fs::write(dir.path().join("artifacts/test1.ll"), "define i32 @main()\n").expect("artifact");

    let err = export_site(builtin(), DeploymentContext::root(), dir.path(), dir.path())
        .expect_err("same directory must be rejected");
    assert!(err.to_string().contains("overlaps"));

    let content = fs::read_to_string(dir.path().join("artifacts/test1.ll")).expect("artifact");
    assert_eq!(content, "define i32 @main()\n");
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn nested_output_and_public_dirs_are_rejected() {
    let root = tempfile::tempdir().expect("root");
    let public = root.path().join("public");
    fs::create_dir_all(public.join("artifacts")).expect("public dir");

    let inside = export_site(
        builtin(),
        DeploymentContext::root(),
        &public,
        &public.join("docs"),
    );
    assert!(inside.is_err());

    let around = export_site(builtin(), DeploymentContext::root(), &public, root.path());
    assert!(around.is_err());
}
