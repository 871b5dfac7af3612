use super::*;

#[test]
fn vision_and_cta_both_name_the_program() {
    let program = find_program("engineering", "software").expect("software program");
    let title = program.title();

    assert!(vision_paragraph(program).starts_with(&format!("The {title} program")));
    assert_eq!(journey_heading(program), format!("Begin Your Journey: {title}"));
}
