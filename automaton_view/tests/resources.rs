use std::path::Path;

use automaton::{BoundaryCondition, BoundarySource, CompositionBuilder, Model, Rule};

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn shipped_patterns_are_valid() {
    let builder = CompositionBuilder::new(manifest_dir().join("resources")).unwrap();
    let library = builder.library();
    assert_eq!(library.names(), ["A", "B", "ether"]);
    for name in library.names() {
        let bits = library.get(name).unwrap();
        assert!(BoundaryCondition::from_bits(bits).is_ok(), "{name}");
    }
}

#[test]
fn demo_composition_builds() {
    let source = BoundarySource::Composition(manifest_dir().join("../demos/gliders.build"));
    let boundary = BoundaryCondition::from_source(&source, &manifest_dir().join("resources")).unwrap();
    assert_eq!(boundary.width(), 40 * 14 + 6 + 12 * 14 + 20 + 40 * 14);

    let model = Model::batch(Rule::new(110), boundary, 100).unwrap();
    assert_eq!(model.polygon().height(), 100);
}

#[test]
fn demo_boundary_file_joins_lines() {
    let source = BoundarySource::File(manifest_dir().join("../demos/single_cell.txt"));
    let boundary = BoundaryCondition::from_source(&source, Path::new("")).unwrap();
    assert_eq!(boundary.width(), 80);
    assert_eq!(boundary.row().count_ones(), 1);
}
