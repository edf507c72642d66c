use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use resumetr::{
    parser::{parse_resume_text, SectionKey},
    profile::{Education, UserProfile},
    surface::{DrawOperation, RecordedDocument, RecordingSurface},
    DocumentAssembler,
};
use std::io::Cursor;

const RESUME_TEXT: &str = include_str!("../fixtures/alex_johnson_resume.txt");
const PROFILE_JSON: &str = include_str!("../fixtures/alex_johnson_profile.json");

fn sample_profile() -> UserProfile {
    UserProfile::from_json(PROFILE_JSON).unwrap()
}

fn signature_data_url() -> String {
    let mut signature = RgbaImage::from_pixel(150, 40, Rgba([0, 0, 0, 0]));
    for x in 10..140 {
        signature.put_pixel(x, 20 + (x % 7), Rgba([15, 23, 42, 255]));
    }
    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgba8(signature)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .unwrap();

    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png_bytes)
    )
}

fn record(resume_text: &str, user_profile: &UserProfile, style_name: &str) -> RecordedDocument {
    DocumentAssembler::default()
        .render(resume_text, user_profile, style_name, RecordingSurface::new())
        .unwrap()
}

/// Lines as long as the signature, which only the signature rule draws.
fn signature_rules(document: &RecordedDocument) -> usize {
    document
        .lines()
        .into_iter()
        .filter(|(_, from, to)| (to[0] - from[0] - 100.0).abs() < 0.01)
        .count()
}

#[test]
fn template_sections_are_parsed() {
    let sections = parse_resume_text(RESUME_TEXT);

    assert_eq!(sections.name(), "Alex Johnson");
    for key in [
        SectionKey::Summary,
        SectionKey::TechnicalSkills,
        SectionKey::SoftSkills,
        SectionKey::WorkExperience,
        SectionKey::PersonalProjects,
        SectionKey::Education,
    ] {
        assert!(sections.has_content(key), "{:?} should have content", key);
    }
    assert!(sections.lines(SectionKey::References).is_empty());
}

#[test]
fn two_column_styles_keep_skills_and_education_in_the_sidebar() {
    let mut user_profile = sample_profile();
    user_profile.education.push(Education {
        institution: "Open University".into(),
        degree: "M.S. in Distributed Systems".into(),
        grad_date: "2020".into(),
        ..Education::default()
    });

    for style_name in ["Modern", "Professional"] {
        let document = record(RESUME_TEXT, &user_profile, style_name);

        let first_degree = document.index_of_text("B.S. in Computer Science").unwrap();
        let second_degree = document.index_of_text("M.S. in Distributed Systems").unwrap();
        assert!(first_degree < second_degree);
        assert_eq!(document.find_text("Open University").unwrap().1[0], 40.0);

        let main_column_texts: Vec<&str> = document
            .texts()
            .filter(|(_, _, position)| position[0] > 200.0)
            .map(|(_, text, _)| text)
            .collect();
        assert!(main_column_texts.contains(&"WORK EXPERIENCE"));
        for sidebar_title in ["TECHNICAL SKILLS", "SOFT SKILLS", "EDUCATION"] {
            assert!(
                !main_column_texts.contains(&sidebar_title),
                "{} drew {} in the main column",
                style_name,
                sidebar_title
            );
        }
    }
}

#[test]
fn references_are_drawn_in_the_main_column_of_two_column_styles() {
    let document = record(RESUME_TEXT, &sample_profile(), "Modern");

    let (_, title) = document.find_text("REFERENCES").unwrap();
    let (_, reference) = document
        .find_text("Dr. Emily Carter, CTO, Innovate Co.")
        .unwrap();
    assert_eq!(title[0], 240.0);
    assert_eq!(reference[0], 240.0);
    assert!(document
        .find_text("emily.c@innovate.co | (555) 111-2222")
        .is_some());
}

#[test]
fn single_column_header_comes_first_and_signature_last() {
    let mut user_profile = sample_profile();
    user_profile.signature = Some(signature_data_url());

    for style_name in ["Classic", "Elegant", "Minimalist", "Tech"] {
        let document = record(RESUME_TEXT, &user_profile, style_name);

        let name = document.index_of_text("Alex Johnson").unwrap();
        let contact = document
            .index_of_text("alex.j@email.com | (555) 123-4567 | linkedin.com/in/alexjohnsondev")
            .unwrap();
        assert!(name < contact);
        let first_text = document.texts().next().map(|(_, text, _)| text);
        assert_eq!(first_text, Some("Alex Johnson"));

        let image_index = document
            .operations
            .iter()
            .position(|operation| matches!(operation, DrawOperation::Image { .. }))
            .unwrap();
        let texts_after_image: Vec<&str> = document.operations[image_index..]
            .iter()
            .filter_map(|operation| match operation {
                DrawOperation::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts_after_image, vec!["Alex Johnson"], "{}", style_name);
        assert_eq!(signature_rules(&document), 1);
    }
}

#[test]
fn missing_signatures_leave_no_image_and_no_rule() {
    for signature in [None, Some(String::new()), Some("   ".to_string())] {
        let user_profile = UserProfile {
            signature,
            ..sample_profile()
        };
        for style_name in ["Modern", "Classic"] {
            let document = record(RESUME_TEXT, &user_profile, style_name);

            assert!(document.images().is_empty());
            assert_eq!(signature_rules(&document), 0);
        }
    }
}

#[test]
fn the_sidebar_signature_is_drawn_when_there_is_room() {
    let mut user_profile = sample_profile();
    user_profile.signature = Some(signature_data_url());
    let document = record(RESUME_TEXT, &user_profile, "Modern");

    let images = document.images();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].0, 0);
    assert_eq!(images[0].1.x, 40.0);
    assert_eq!(signature_rules(&document), 1);
}

#[test]
fn rendering_is_a_pure_function_of_its_inputs() {
    let mut user_profile = sample_profile();
    user_profile.signature = Some(signature_data_url());

    let first = record(RESUME_TEXT, &user_profile, "Professional");
    let second = record(RESUME_TEXT, &user_profile, "Professional");
    similar_asserts::assert_eq!(first, second);

    let assembler = DocumentAssembler::default();
    let first_pdf = assembler
        .export_pdf(RESUME_TEXT, &user_profile, "Elegant")
        .unwrap();
    let second_pdf = assembler
        .export_pdf(RESUME_TEXT, &user_profile, "Elegant")
        .unwrap();
    assert_eq!(first_pdf.page_count, second_pdf.page_count);
    assert!(first_pdf.bytes == second_pdf.bytes);
}

#[test]
fn unknown_styles_render_exactly_like_modern() {
    let user_profile = sample_profile();

    similar_asserts::assert_eq!(
        record(RESUME_TEXT, &user_profile, "Foo"),
        record(RESUME_TEXT, &user_profile, "Modern")
    );

    let foo = resumetr::export_resume(RESUME_TEXT, &user_profile, "Foo").unwrap();
    let modern = resumetr::export_resume(RESUME_TEXT, &user_profile, "Modern").unwrap();
    assert_eq!(foo.file_name, "Alex_Johnson_Modern_Resume.pdf");
    assert_eq!(foo.file_name, modern.file_name);
    assert!(foo.bytes == modern.bytes);
}

#[test]
fn entry_headers_stay_with_their_first_bullet() {
    let bullet = "Designed, implemented and operated a distributed ingestion pipeline processing \
                  billions of events per day while keeping the latency of every stage well under \
                  the agreed objectives and mentoring the engineers who took it over afterwards.";
    let mut resume_text = String::from("Alex Johnson\nalex.j@email.com\nWork Experience\n");
    for index in 0..24 {
        resume_text.push_str(&format!(
            "Job {index} | Company {index}\n2020 - 2021\n- {bullet}\n"
        ));
    }
    let user_profile = UserProfile {
        name: "Alex Johnson".into(),
        ..UserProfile::default()
    };
    let document = record(&resume_text, &user_profile, "Modern");
    assert!(document.page_count() > 2);

    for index in 0..24 {
        let (title_page, _) = document.find_text(&format!("Job {index}")).unwrap();
        let (company_page, _) = document.find_text(&format!("Company {index}")).unwrap();
        let first_bullet_line_page = document
            .texts()
            .skip_while(|(_, text, _)| *text != format!("Company {index}"))
            .find(|(_, text, _)| text.starts_with("Designed"))
            .map(|(page, _, _)| page)
            .unwrap();
        assert_eq!(title_page, company_page);
        assert_eq!(title_page, first_bullet_line_page, "Job {index} was split");
    }

    // Every entry holds a single bullet, so every page break happens before an entry title
    for page in 1..document.page_count() {
        let (text, position) = document
            .texts()
            .find(|(text_page, _, _)| *text_page == page)
            .map(|(_, text, position)| (text, position))
            .unwrap();
        assert!(text.starts_with("Job "), "page {page} starts with {text:?}");
        assert_eq!(position[1], 40.0);
    }
}

#[test]
fn exported_pdfs_reload_with_their_metadata() {
    let exported_document =
        resumetr::export_resume(RESUME_TEXT, &sample_profile(), "Modern").unwrap();
    assert_eq!(exported_document.file_name, "Alex_Johnson_Modern_Resume.pdf");

    let document = lopdf::Document::load_mem(&exported_document.bytes).unwrap();
    assert_eq!(document.get_pages().len(), exported_document.page_count);

    let info_id = document
        .trailer
        .get(b"Info")
        .and_then(lopdf::Object::as_reference)
        .unwrap();
    let info = document
        .get_object(info_id)
        .and_then(lopdf::Object::as_dict)
        .unwrap();
    assert_eq!(
        info.get(b"Title").unwrap(),
        &lopdf::Object::String(b"Alex Johnson Resume".to_vec(), lopdf::StringFormat::Literal)
    );
}

#[test]
fn exported_documents_are_saved_under_their_file_name() {
    let exported_document =
        resumetr::export_resume(RESUME_TEXT, &sample_profile(), "Tech").unwrap();
    let directory = std::env::temp_dir().join(format!("resumetr-save-{}", std::process::id()));
    std::fs::create_dir_all(&directory).unwrap();

    let file_path = exported_document.save_to(&directory).unwrap();
    assert_eq!(file_path, directory.join("Alex_Johnson_Tech_Resume.pdf"));
    assert_eq!(std::fs::read(&file_path).unwrap(), exported_document.bytes);
    std::fs::remove_dir_all(&directory).unwrap();
}
