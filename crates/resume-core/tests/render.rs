use resume_core::{
    EducationEntry, ExperienceEntry, ResumeDocument, build_preview, format_month, render_json,
    render_text,
};

fn sample_document() -> ResumeDocument {
    let mut document = ResumeDocument::default();
    document.personal.first_name = "Jordan".into();
    document.personal.last_name = "Hayes".into();
    document.personal.email = "jordan.hayes@example.com".into();
    document.personal.phone = "555-0100".into();
    document.personal.city = "Austin".into();
    document.personal.state = "TX".into();

    document.experience = vec![
        ExperienceEntry {
            id: "1".into(),
            title: "Squad Leader".into(),
            branch: "US Army".into(),
            start_date: "2018-05".into(),
            end_date: String::new(),
            responsibilities: "Directed tactical operations for a nine-person team".into(),
            achievements: "Led team of 12, improved readiness by 20%".into(),
        },
        ExperienceEntry {
            id: "2".into(),
            title: "Combat Engineer".into(),
            branch: "US Army".into(),
            start_date: "2015-01".into(),
            end_date: "2018-04".into(),
            responsibilities: "Constructed field fortifications".into(),
            achievements: "Commendation medal".into(),
        },
    ];

    document.education = vec![
        EducationEntry {
            id: "1".into(),
            school: "Austin Community College".into(),
            degree: "AAS".into(),
            field_of_study: "Logistics".into(),
            start_date: "2013-08".into(),
            end_date: "2015-05".into(),
        },
        // No school entered yet; the preview drops this row.
        EducationEntry::with_id("2"),
    ];

    document.skills.technical = vec!["Logistics".into(), String::new()];
    document.skills.soft = vec!["Leadership".into()];
    document.target.title = "Operations Manager".into();
    document.target.industry = "Technology".into();
    document.target.summary = "Veteran leader transitioning to civilian operations.".into();
    document
}

#[test]
fn preview_keeps_one_entry_per_experience() {
    let document = sample_document();
    let payload = build_preview(&document);
    assert_eq!(payload.experience.len(), document.experience.len());
}

#[test]
fn matched_title_is_translated() {
    let payload = build_preview(&sample_document());
    assert_eq!(payload.experience[0].title, "Team Leader");
    assert_eq!(
        payload.experience[0].responsibilities,
        "Directed team operations and coordination for a nine-person team"
    );
}

#[test]
fn unmatched_title_renders_unchanged() {
    let payload = build_preview(&sample_document());
    assert_eq!(payload.experience[1].title, "Combat Engineer");
}

#[test]
fn open_ended_positions_read_as_present() {
    let payload = build_preview(&sample_document());
    assert_eq!(payload.experience[0].dates, "May 2018 - Present");
    assert_eq!(payload.experience[1].dates, "Jan 2015 - Apr 2018");
}

#[test]
fn education_rows_without_a_school_are_dropped() {
    let payload = build_preview(&sample_document());
    assert_eq!(payload.education.len(), 1);
    assert_eq!(payload.education[0].program, "AAS, Logistics");
}

#[test]
fn blank_skill_labels_are_filtered() {
    let payload = build_preview(&sample_document());
    assert_eq!(payload.technical, vec!["Logistics"]);
}

#[test]
fn text_render_contains_header_and_translated_title() {
    let payload = build_preview(&sample_document());
    let text = render_text(&payload).expect("renderable");
    assert!(text.contains("Jordan Hayes"));
    assert!(text.contains("Team Leader | US Army"));
    assert!(text.contains("PROFESSIONAL SUMMARY"));
    assert!(text.contains("Technical Skills: Logistics"));
    assert!(text.contains("Technology industry"));
}

#[test]
fn json_render_mirrors_the_payload() {
    let payload = build_preview(&sample_document());
    let value = render_json(&payload);
    assert_eq!(value["full_name"], "Jordan Hayes");
    assert_eq!(value["experience"][0]["title"], "Team Leader");
    assert_eq!(value["experience"].as_array().map(Vec::len), Some(2));
}

#[test]
fn month_formatting_handles_edge_input() {
    assert_eq!(format_month("2020-05"), "May 2020");
    assert_eq!(format_month(""), "");
    assert_eq!(format_month("2020-13"), "2020-13");
    assert_eq!(format_month("someday"), "someday");
}
