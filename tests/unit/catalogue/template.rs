use super::*;

#[test]
fn builtin_keeps_definition_order() {
    let ids: Vec<&str> = Catalogue::builtin().all().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "fade-in",
            "fade-out",
            "slide-in-left",
            "bounce",
            "rotate-360",
            "scale-up",
            "shake",
            "flip"
        ]
    );
}

#[test]
fn builtin_passes_validation() {
    let cat = Catalogue::builtin();
    Catalogue::new(cat.all().to_vec()).unwrap();
    assert_eq!(cat.len(), 8);
    assert!(!cat.is_empty());
}

#[test]
fn lookup_by_id() {
    let cat = Catalogue::builtin();
    let t = cat.by_id("rotate-360").unwrap();
    assert_eq!(t.category, "Rotation");
    assert!(t.code.contains("rotation: 360"));
    assert_eq!(t.preview_image_url.as_deref(), Some("/templates/rotate-360.png"));
    assert!(cat.by_id("nope").is_none());
}

#[test]
fn categories_collapse_duplicates() {
    let cats = Catalogue::builtin().categories();
    assert_eq!(cats, ["Basic", "Motion", "Effects", "Rotation", "Scale", "3D"]);
}

#[test]
fn by_category_filters() {
    let effects: Vec<&str> = Catalogue::builtin()
        .by_category("Effects")
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(effects, ["bounce", "shake"]);
    assert!(Catalogue::builtin().by_category("missing").is_empty());
}

#[test]
fn shake_template_repeats() {
    let code = &Catalogue::builtin().by_id("shake").unwrap().code;
    assert!(code.contains("repeat: 5"));
    assert!(code.contains("yoyo: true"));
}

#[test]
fn json_catalogue_rejects_duplicate_ids() {
    let json = r#"[
        { "id": "a", "name": "A", "description": "", "category": "x", "code": "gsap.to(element, {});" },
        { "id": "a", "name": "B", "description": "", "category": "x", "code": "gsap.to(element, {});" }
    ]"#;
    let err = Catalogue::from_json_str(json).unwrap_err();
    assert!(err.to_string().contains("duplicate template id 'a'"));
}

#[test]
fn json_catalogue_reads_camel_case() {
    let json = r#"[
        { "id": "a", "name": "A", "description": "d", "category": "x",
          "code": "gsap.to(element, {});", "previewImageUrl": "/a.png" }
    ]"#;
    let cat = Catalogue::from_json_str(json).unwrap();
    assert_eq!(cat.by_id("a").unwrap().preview_image_url.as_deref(), Some("/a.png"));
}

#[test]
fn empty_code_is_rejected() {
    let json = r#"[{ "id": "a", "name": "A", "description": "", "category": "x", "code": "  " }]"#;
    assert!(matches!(
        Catalogue::from_json_str(json),
        Err(AnimatorError::Validation(_))
    ));
}
