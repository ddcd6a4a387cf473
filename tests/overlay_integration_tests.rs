mod utils;

use helix::cli::processor::FileProcessor;
use helix::config::Config;
use helix::ignore::parse_helixignore_file;
use helix::placeholder::PlaceholderTokens;
use helix::template::processor::TemplateProcessor;
use std::path::Path;
use test_log::test;
use utils::{assert_same_tree, fixture};

fn overlay(template_root: &Path, output_root: &Path) {
    let tokens = PlaceholderTokens::resolve("acme", &Config::default());
    let ignored = parse_helixignore_file(template_root).unwrap();
    let processor = TemplateProcessor::new(
        &tokens,
        template_root.to_path_buf(),
        output_root.to_path_buf(),
        &ignored,
        ".template",
    );
    FileProcessor::new(processor, true).process_all_files().unwrap();
}

#[test]
fn overlay_matches_expected_tree() {
    let output = tempfile::tempdir().unwrap();

    overlay(&fixture("overlay/template"), output.path());

    assert_same_tree(output.path(), &fixture("overlay/expected"));
}

#[test]
fn overlay_twice_is_stable() {
    let output = tempfile::tempdir().unwrap();

    overlay(&fixture("overlay/template"), output.path());
    overlay(&fixture("overlay/template"), output.path());

    assert_same_tree(output.path(), &fixture("overlay/expected"));
}
