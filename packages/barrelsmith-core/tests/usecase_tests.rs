//! End-to-end tests: modules on disk through to generated text.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use barrelsmith_core::usecases::{BarrelOptions, GenerateBarrelUseCase, SourceSpec};
use barrelsmith_core::{BarrelError, ExportScope};

#[test]
fn generates_a_merged_barrel_from_files_on_disk() {
    let dir = TempDir::new().unwrap();
    let users = dir.path().join("users.ts");
    fs::write(
        &users,
        "export interface User { id: number; }\nexport type Role = \"admin\" | \"member\";\n",
    )
    .unwrap();
    let billing = dir.path().join("billing.ts");
    fs::write(
        &billing,
        "export interface User { account: string; }\nexport enum Plan { Free, Pro }\n",
    )
    .unwrap();

    let use_case = GenerateBarrelUseCase::new(ExportScope::ExplicitOnly);
    let sources = vec![
        SourceSpec::new(&users).with_import_alias("users"),
        SourceSpec::new(&billing)
            .with_import_alias("billing")
            .with_enum_wrapper("bill"),
    ];
    let output = use_case
        .execute(&sources, &BarrelOptions::default())
        .unwrap();

    assert!(output.contains("export type User = users.User | billing.User;\n"));
    assert!(output.contains("export type Plan = billing.Plan;\n"));
    assert!(output.contains("    bill: { ...billing.Plan},\n"));
    assert!(output.contains("export type Role = users.Role;\n"));

    // Same inputs, fresh run, same bytes.
    let again = use_case
        .execute(&sources, &BarrelOptions::default())
        .unwrap();
    assert_eq!(output, again);
}

#[test]
fn single_file_takes_the_single_source_shape() {
    let dir = TempDir::new().unwrap();
    let colors = dir.path().join("colors.ts");
    fs::write(&colors, "export type Color = \"red\" | \"blue\";\n").unwrap();

    let use_case = GenerateBarrelUseCase::new(ExportScope::ExplicitOnly);
    let sources = vec![SourceSpec::new(&colors).with_import_alias("colors")];
    let options = BarrelOptions {
        header: Some("Generated. Do not edit.".to_string()),
        indent: None,
    };
    let output = use_case.execute(&sources, &options).unwrap();

    assert!(output.starts_with("// Generated. Do not edit.\nimport * as colors from \""));
    assert!(output.contains("export type Color = colors.Color;\n"));
    assert!(output.contains("export const Color = {\n    Red: \"red\",\n    Blue: \"blue\",\n} as const;\n"));
}

#[test]
fn missing_input_file_is_an_io_error() {
    let use_case = GenerateBarrelUseCase::new(ExportScope::ExplicitOnly);
    let sources = vec![SourceSpec::new("no/such/module.ts")];

    let err = use_case
        .execute(&sources, &BarrelOptions::default())
        .unwrap_err();
    assert!(matches!(err, BarrelError::Io(_)));
}
