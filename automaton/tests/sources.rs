use std::fs;
use std::path::Path;

use automaton::{BoundaryCondition, BoundarySource, CompositionBuilder, Error};

#[test]
fn boundary_from_multiline_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boundary.txt");
    fs::write(&path, "0001\n1000\r\n01\n").unwrap();

    let boundary =
        BoundaryCondition::from_source(&BoundarySource::File(path), Path::new("")).unwrap();
    assert_eq!(boundary.row().to_string(), "0001100001");
}

#[test]
fn boundary_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    assert!(matches!(
        BoundaryCondition::from_file(&missing),
        Err(Error::Io { .. })
    ));

    let bad = dir.path().join("bad.txt");
    fs::write(&bad, "0102\n").unwrap();
    assert!(matches!(
        BoundaryCondition::from_file(&bad),
        Err(Error::Parse { ch: '2', position: 3 })
    ));
}

#[test]
fn composition_from_resource_directory() {
    let resources = tempfile::tempdir().unwrap();
    fs::write(resources.path().join("glider"), "10\n").unwrap();
    fs::write(resources.path().join("other"), "0").unwrap();

    let work = tempfile::tempdir().unwrap();
    let spec = work.path().join("spec.build");
    fs::write(&spec, "2 glider\nother\n").unwrap();

    let source = BoundarySource::Composition(spec);
    let boundary = BoundaryCondition::from_source(&source, resources.path()).unwrap();
    assert_eq!(boundary.row().to_string(), "10100");
}

#[test]
fn composition_errors() {
    let resources = tempfile::tempdir().unwrap();
    fs::write(resources.path().join("glider"), "10").unwrap();
    let builder = CompositionBuilder::new(resources.path()).unwrap();

    let work = tempfile::tempdir().unwrap();
    let empty = work.path().join("empty.build");
    fs::write(&empty, "\n  \n").unwrap();
    assert!(matches!(builder.build(&empty), Err(Error::Validation(_))));

    let unknown = work.path().join("unknown.build");
    fs::write(&unknown, "glider 3 spaceship").unwrap();
    assert!(matches!(
        builder.build(&unknown),
        Err(Error::NotFound(name)) if name == "spaceship"
    ));

    assert!(matches!(
        builder.build(work.path().join("absent.build")),
        Err(Error::Io { .. })
    ));
}
