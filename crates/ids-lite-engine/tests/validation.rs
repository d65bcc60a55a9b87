// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end validation of specification sets against an in-memory model

use ids_lite_engine::{
    AttributeFacet, BaseType, ClassificationFacet, EntityFacet, MaterialFacet, PartOfFacet,
    PropertyFacet, Restriction, SimpleReporter, Specification, SpecificationSet,
};
use ids_lite_graph::{MemoryGraph, SiPrefix};
use ids_lite_model::{
    ClassificationRef, EntityId, MaterialAssignment, MaterialInfo, MeasureKind, PropertySet,
    PropertyValue,
};

/// A small project: two walls (one fully specified, one bare), a slab
/// aggregated into an assembly, and a millimetre length unit.
struct Fixture {
    graph: MemoryGraph,
    good_wall: EntityId,
    bare_wall: EntityId,
    slab: EntityId,
}

fn fixture() -> Fixture {
    let mut graph = MemoryGraph::new();
    graph.set_unit(MeasureKind::Length, SiPrefix::Milli);

    let good_wall = graph.add_entity("IfcWall");
    graph.set_attribute(good_wall, "Name", "Waldo");
    graph.add_property_set(
        good_wall,
        PropertySet::new("Pset_WallCommon")
            .with(PropertyValue::new("Status", "New"))
            .with(PropertyValue::new("LoadBearing", false))
            .with(PropertyValue::with_measure("Width", 200.0, MeasureKind::Length)),
    );
    graph.add_classification(
        good_wall,
        ClassificationRef::new("EF_25_10_25", "Uniclass")
            .with_ancestors(vec!["EF_25_10".to_string(), "EF_25".to_string()]),
    );
    graph.assign_material(
        good_wall,
        MaterialAssignment::Single(MaterialInfo::named("Concrete").with_category("CONCRETE")),
    );

    let bare_wall = graph.add_entity("IfcWall");
    graph.declare_attributes(bare_wall, &["Name"]);

    let assembly = graph.add_entity("IfcElementAssembly");
    let slab = graph.add_entity("IfcSlab");
    graph.aggregate(slab, assembly);

    Fixture {
        graph,
        good_wall,
        bare_wall,
        slab,
    }
}

#[test]
fn minimal_specification_pass_fail() {
    let Fixture {
        graph,
        good_wall,
        bare_wall,
        ..
    } = fixture();

    let mut spec = Specification::new("Walls are named Waldo");
    spec.add_applicability(EntityFacet::new("IfcWall"));
    spec.add_requirement(AttributeFacet::new("Name").with_value("Waldo"));

    assert_eq!(spec.status(), None);
    let status = spec.validate(&graph).unwrap();
    assert!(!status);
    assert_eq!(spec.applicable_entities(), &[good_wall, bare_wall]);
    assert_eq!(spec.failed_entities(), &[bare_wall]);
}

#[test]
fn requirements_cover_every_facet_kind() {
    let Fixture {
        graph, bare_wall, ..
    } = fixture();

    let mut spec = Specification::new("Fully specified walls");
    spec.add_applicability(EntityFacet::new("IfcWall"));
    spec.add_requirement(AttributeFacet::new("Name"));
    spec.add_requirement(
        PropertyFacet::new("Pset_WallCommon", "LoadBearing").with_value(false),
    );
    spec.add_requirement(
        // 200 mm wall, required as 0.2 m.
        PropertyFacet::new("Pset_WallCommon", "Width")
            .with_value(Restriction::enumeration([0.2], BaseType::Decimal).unwrap())
            .with_measure(MeasureKind::Length),
    );
    spec.add_requirement(
        // Coarse Uniclass code matches the finer subdivision on the wall.
        ClassificationFacet::new()
            .with_value("EF_25_10")
            .with_system("Uniclass"),
    );
    spec.add_requirement(MaterialFacet::new().with_value("CONCRETE"));

    let status = spec.validate(&graph).unwrap();
    assert!(!status);
    assert_eq!(spec.failed_entities(), &[bare_wall]);
}

#[test]
fn applicability_conjunction_narrows_selection() {
    let Fixture {
        graph, good_wall, ..
    } = fixture();

    let mut spec = Specification::new("Classified walls are concrete");
    spec.add_applicability(EntityFacet::new("IfcWall"));
    spec.add_applicability(ClassificationFacet::new().with_system("Uniclass"));
    spec.add_requirement(MaterialFacet::new().with_value("Concrete"));

    let status = spec.validate(&graph).unwrap();
    assert!(status);
    assert_eq!(spec.applicable_entities(), &[good_wall]);
}

#[test]
fn partof_specification() {
    let Fixture { graph, slab, .. } = fixture();

    let mut spec = Specification::new("Slabs belong to assemblies");
    spec.add_applicability(EntityFacet::new("IfcSlab"));
    spec.add_requirement(PartOfFacet::new("IfcElementAssembly"));

    assert!(spec.validate(&graph).unwrap());
    assert_eq!(spec.applicable_entities(), &[slab]);
}

#[test]
fn set_validation_streams_records_and_isolates_failures() {
    let Fixture {
        mut graph,
        good_wall,
        bare_wall,
        ..
    } = fixture();

    let mut set = SpecificationSet::new("Project requirements");
    let mut naming = Specification::new("Naming");
    naming.add_applicability(EntityFacet::new("IfcWall"));
    naming.add_requirement(AttributeFacet::new("Name").with_value("Waldo"));
    set.add(naming);
    let mut materials = Specification::new("Materials");
    materials.add_applicability(EntityFacet::new("IfcWall"));
    materials.add_requirement(MaterialFacet::new());
    set.add(materials);

    let mut reporter = SimpleReporter::with_valid();
    let outcomes = set.validate_all(&graph, &mut reporter);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.is_ok()));

    // Two walls, one requirement per specification.
    assert_eq!(reporter.records.len(), 4);
    let failures: Vec<_> = reporter.failures().collect();
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|r| r.entity == bare_wall));
    assert!(reporter
        .records
        .iter()
        .any(|r| r.entity == good_wall && r.passed));

    // Corrupt one relationship: only the specification that walks it aborts.
    let ghost = graph.add_entity("IfcSystem");
    graph.assign_group(bare_wall, ghost);
    graph.remove(ghost);
    let mut systems = Specification::new("Systems");
    systems.add_applicability(EntityFacet::new("IfcWall"));
    systems.add_requirement(PartOfFacet::default());
    set.add(systems);

    let outcomes = set.validate_all(&graph, &mut SimpleReporter::new());
    assert!(outcomes[0].is_ok());
    assert!(outcomes[1].is_ok());
    assert!(outcomes[2].is_err());
    assert_eq!(set.specifications[2].status(), None);
    assert_eq!(set.specifications[0].status(), Some(false));
}

#[test]
fn authoring_round_trip_is_lossless() {
    let mut spec = Specification::new("Round trip").with_description("serde round trip");
    spec.add_applicability(
        EntityFacet::new(
            Restriction::enumeration(["IfcWall", "IfcSlab"], BaseType::String).unwrap(),
        ),
    );
    spec.add_requirement(
        PropertyFacet::new("Pset_WallCommon", Restriction::pattern("Fire.*").unwrap())
            .with_value(Restriction::pattern("[A-Z]{2,4}").unwrap()),
    );

    let json = serde_json::to_string(&spec).unwrap();
    let mut back: Specification = serde_json::from_str(&json).unwrap();
    assert_eq!(back.name, spec.name);
    assert_eq!(back.applicability(), spec.applicability());
    assert_eq!(back.requirements(), spec.requirements());
    assert_eq!(back.status(), None);

    // The revived specification still validates.
    let Fixture { graph, .. } = fixture();
    assert!(back.validate(&graph).is_ok());
}
