use super::*;
use crate::resolve::snippet::resolve;

#[test]
fn raw_prefixes_dependency_header() {
    let script = resolve("fade in");
    let out = format(&script, ExportMode::Raw);
    assert!(out.starts_with("// GSAP Animation Code\n"));
    assert!(out.contains("gsap.min.js"));
    assert!(out.ends_with(&script));
}

#[test]
fn page_embeds_script_and_target() {
    let script = "gsap.to(\"#animationTarget\", { x: 5 });";
    let out = format(script, ExportMode::Page);
    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.contains("<div id=\"animationTarget\">Target</div>"));
    assert!(out.contains("#animationTarget {\n      width: 100px;\n      height: 100px;"));
    assert!(out.contains(script));
    assert!(out.ends_with("</html>"));
}

#[test]
fn component_replaces_every_selector_and_nothing_else() {
    let script = "gsap.set(\"#animationTarget\", { x: 0 });\n  gsap.to(\"#animationTarget\",   { x: 1 }); // #animationTarget";
    let out = format(script, ExportMode::Component);
    let expected_body = "gsap.set(targetRef.current, { x: 0 });\n  gsap.to(targetRef.current,   { x: 1 }); // #animationTarget";
    assert!(out.contains(expected_body));
    assert!(!out.contains("\"#animationTarget\""));
    assert!(out.contains("export default AnimationComponent;"));
    assert!(out.contains("style={{\n"));
}

#[test]
fn element_binding_scripts_pass_through_component_mode() {
    let script = "gsap.to(element, {\n  opacity: 1\n});";
    assert!(format(script, ExportMode::Component).contains(script));
}

#[test]
fn empty_script_still_yields_wrapper() {
    for mode in ExportMode::ALL {
        assert!(!format("", mode).is_empty());
    }
}

#[test]
fn modes_parse_from_either_spelling() {
    assert_eq!("js".parse::<ExportMode>().unwrap(), ExportMode::Raw);
    assert_eq!("HTML".parse::<ExportMode>().unwrap(), ExportMode::Page);
    assert_eq!("react".parse::<ExportMode>().unwrap(), ExportMode::Component);
    assert_eq!("component".parse::<ExportMode>().unwrap(), ExportMode::Component);
    assert!("pdf".parse::<ExportMode>().is_err());
}

#[test]
fn file_extensions() {
    assert_eq!(ExportMode::Raw.file_extension(), "js");
    assert_eq!(ExportMode::Page.file_extension(), "html");
    assert_eq!(ExportMode::Component.file_extension(), "jsx");
}
