//! The document renderer: resume model in, complete LaTeX source out.
//!
//! `build_latex` is pure and total — it never fails, never mutates its
//! input, and substitutes empty output for missing or empty sections.
//! Section order and visibility come from the document's `sectionConfig`;
//! without one, a fixed fallback order applies. The `personal` block always
//! renders first as a centered header, never as a body section, and body
//! sections are separated by a horizontal-rule divider.

use serde_json::Value;

use crate::latex::escape::{escape_latex, href};
use crate::models::resume::{
    Award, Certification, CustomSection, EducationEntry, ExperienceEntry, LanguageSkill, Personal,
    Project, Publication, Resume, SkillCategory,
};

/// Section order and display titles used when the document carries no
/// `sectionConfig`. `personal` is implicit and always first.
const FALLBACK_ORDER: &[(&str, &str)] = &[
    ("summary", "Summary"),
    ("experience", "Experience & Projects"),
    ("skills", "Technical Skills"),
    ("certifications", "Certifications"),
    ("education", "Education"),
];

/// Renders the full LaTeX document for a resume.
pub fn build_latex(resume: &Resume) -> String {
    let mut parts: Vec<String> = vec![PREAMBLE.to_string(), "\\begin{document}".to_string()];
    parts.extend(sections(resume));
    parts.push("\\end{document}".to_string());

    parts.retain(|p| !p.is_empty());
    parts.join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Ordering and dispatch
// ────────────────────────────────────────────────────────────────────────────

fn sections(resume: &Resume) -> Vec<String> {
    let mut parts = Vec::new();

    // The personal header renders first, unconditionally on its position in
    // (or absence from) the configured order, and never takes a divider.
    if resume.personal.has_content() {
        parts.push(personal_header(&resume.personal));
        parts.push("\\raggedright".to_string());
    }

    let ordered: Vec<(String, String)> = match &resume.section_config {
        Some(config) => config
            .order
            .iter()
            .filter(|key| key.as_str() != "personal")
            .filter(|key| config.visibility.get(*key).copied().unwrap_or(false))
            .filter(|key| section_has_content(resume, key))
            .map(|key| {
                let title = config.titles.get(key).cloned().unwrap_or_else(|| key.clone());
                (key.clone(), title)
            })
            .collect(),
        None => FALLBACK_ORDER
            .iter()
            .filter(|(key, _)| section_has_content(resume, key))
            .map(|(key, title)| (key.to_string(), title.to_string()))
            .collect(),
    };

    // Emptiness was tested above, so every listed section produces content
    // and the divider count is exactly (body sections - 1).
    for (i, (key, title)) in ordered.iter().enumerate() {
        if i > 0 {
            parts.push(divider());
        }
        parts.push(render_section(resume, key, title));
    }

    parts
}

/// The per-section emptiness predicate: one consistent rule per section type.
fn section_has_content(resume: &Resume, key: &str) -> bool {
    match key {
        "summary" => !resume.summary.trim().is_empty(),
        "experience" => !resume.experience.is_empty(),
        "education" => !resume.education.is_empty(),
        "projects" => !resume.projects.is_empty(),
        "skills" => !resume.skills.categories.is_empty(),
        "certifications" => !resume.certifications.is_empty(),
        "awards" => !resume.awards.is_empty(),
        "publications" => !resume.publications.is_empty(),
        "languages" => !resume.languages.is_empty(),
        "customSections" => !resume.custom_sections.is_empty(),
        _ => resume.extra.get(key).map(value_is_truthy).unwrap_or(false),
    }
}

fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().unwrap_or(0.0) != 0.0,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn render_section(resume: &Resume, key: &str, title: &str) -> String {
    let heading = format!("\\section*{{{}}}", escape_latex(title));

    match key {
        "summary" => format!("{heading}\n{}", escape_latex(&resume.summary)),
        "experience" => experience_section(&heading, &resume.experience),
        "education" => education_section(&heading, &resume.education),
        "skills" => skills_section(&heading, &resume.skills.categories),
        "certifications" => certifications_section(&heading, &resume.certifications),
        "awards" => awards_section(&heading, &resume.awards),
        "publications" => publications_section(&heading, &resume.publications),
        "languages" => languages_section(&heading, &resume.languages),
        "projects" => projects_section(&heading, &resume.projects),
        "customSections" => custom_sections_section(&heading, &resume.custom_sections),
        // Unknown section: heading plus the escaped string form of the value.
        _ => {
            let raw = resume.extra.get(key).map(value_to_text).unwrap_or_default();
            format!("{heading}\n{}", escape_latex(&raw))
        }
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal header
// ────────────────────────────────────────────────────────────────────────────

fn personal_header(p: &Personal) -> String {
    let mut lines = vec!["\\centering".to_string()];

    if present(&p.name) {
        lines.push(format!(
            "{{\\Huge \\textbf{{\\textcolor{{black}}{{{}}}}}}}\\\\",
            escape_latex(&p.name)
        ));
    }
    if present(&p.title) {
        lines.push(format!("{{\\large \\textbf{{{}}}}}\\\\", escape_latex(&p.title)));
    }

    let mut contacts = Vec::new();
    if present(&p.email) {
        contacts.push(format!(
            "\\faEnvelope \\, \\href{{mailto:{}}}{{{}}}",
            escape_latex(&p.email),
            escape_latex(&p.email)
        ));
    }
    if present(&p.phone) {
        contacts.push(format!("\\faPhone \\, {}", escape_latex(&p.phone)));
    }
    if present(&p.location) {
        contacts.push(format!("\\faMapMarker \\, {}", escape_latex(&p.location)));
    }
    if present(&p.linkedin) {
        let label = profile_label(&p.linkedin, "linkedin.com");
        contacts.push(format!("\\faLinkedin \\, {}", href(&p.linkedin, label)));
    }
    if present(&p.github) {
        let label = profile_label(&p.github, "github.com");
        contacts.push(format!("\\faGithub \\, {}", href(&p.github, label)));
    }
    if present(&p.website) {
        contacts.push(format!("\\faGlobe \\, {}", href(&p.website, "")));
    }

    if !contacts.is_empty() {
        lines.push("{\\small".to_string());
        lines.push(contacts.join(" \\quad "));
        lines.push("}".to_string());
    }

    lines.join("\n")
}

/// Contact label for a profile URL: the last path segment when the URL is on
/// the expected host, otherwise the URL itself. An empty last segment (for a
/// trailing slash) makes `href` fall back to the full URL.
fn profile_label<'a>(url: &'a str, host: &str) -> &'a str {
    if url.contains(host) {
        url.rsplit('/').next().unwrap_or(url)
    } else {
        url
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Body section formatters
// ────────────────────────────────────────────────────────────────────────────

fn experience_section(heading: &str, entries: &[ExperienceEntry]) -> String {
    let body = entries
        .iter()
        .map(|e| {
            let mut line = String::new();
            if present(&e.role) {
                line.push_str(&format!("\\textbf{{{}}}", escape_latex(&e.role)));
            }
            if present(&e.company) {
                line.push_str(&format!(" – {}", escape_latex(&e.company)));
            }

            let location = if present(&e.location) { e.location.trim() } else { "" };
            let dates = date_range(&e.start_date, &e.end_date);
            if !location.is_empty() || !dates.is_empty() {
                let separator = if !location.is_empty() && !dates.is_empty() { " | " } else { "" };
                line.push_str(&format!(
                    " \\hfill \\textit{{{}{separator}{}}}",
                    escape_latex(location),
                    escape_latex(&dates)
                ));
            }

            join_header_and_bullets(line, bullet_list(&e.bullets))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("\\Needspace{{10\\baselineskip}}\n{heading}\n\n{body}")
}

fn education_section(heading: &str, entries: &[EducationEntry]) -> String {
    let items = entries
        .iter()
        .map(|e| {
            let degree = if present(&e.degree) {
                format!("\\textbf{{{}}}", escape_latex(&e.degree))
            } else {
                String::new()
            };
            let dates = date_range(&e.start_date, &e.end_date);
            let date_text = if dates.is_empty() {
                String::new()
            } else {
                format!(" \\hfill \\textit{{{}}}", escape_latex(&dates))
            };

            let mut item = format!("\\item {degree}{date_text}");

            let institution = if present(&e.institution) {
                format!("\\textit{{{}}}", escape_latex(&e.institution))
            } else {
                String::new()
            };
            let gpa = if present(&e.gpa) {
                format!(" — {}", escape_latex(&e.gpa))
            } else {
                String::new()
            };
            if !institution.is_empty() || !gpa.is_empty() {
                item.push_str(&format!(" \\\\\n{institution}{gpa}"));
            }

            let details = bullet_list(&e.details);
            if !details.is_empty() {
                item.push_str(&format!("\n{details}"));
            }

            item
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("\\Needspace{{6\\baselineskip}}\n{heading}\n\\begin{{itemize}}\n{items}\n\\end{{itemize}}")
}

fn skills_section(heading: &str, categories: &[SkillCategory]) -> String {
    let items = categories
        .iter()
        .map(|c| {
            format!(
                "\\item \\textbf{{{}:}} {}",
                escape_latex(&c.name),
                escape_latex(&c.items.join(", "))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("\\Needspace{{7\\baselineskip}}\n{heading}\n\\begin{{itemize}}\n{items}\n\\end{{itemize}}")
}

fn certifications_section(heading: &str, certifications: &[Certification]) -> String {
    let items = certifications
        .iter()
        .map(|c| {
            let mut text = if present(&c.link) {
                href(&c.link, &c.name)
            } else {
                escape_latex(&c.name)
            };
            if present(&c.issuer) {
                text.push_str(&format!(" by {}", escape_latex(&c.issuer)));
            }
            if present(&c.year) {
                text.push_str(&format!(" ({})", escape_latex(&c.year)));
            }
            format!("\\item {text}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("\\Needspace{{10\\baselineskip}}\n{heading}\n\\begin{{itemize}}\n{items}\n\\end{{itemize}}")
}

fn awards_section(heading: &str, awards: &[Award]) -> String {
    let items = awards
        .iter()
        .map(|a| {
            let mut text = escape_latex(&a.name);
            if present(&a.issuer) {
                text.push_str(&format!(" - {}", escape_latex(&a.issuer)));
            }
            if present(&a.year) {
                text.push_str(&format!(" ({})", escape_latex(&a.year)));
            }
            format!("\\item {text}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("\\Needspace{{6\\baselineskip}}\n{heading}\n\\begin{{itemize}}\n{items}\n\\end{{itemize}}")
}

fn publications_section(heading: &str, publications: &[Publication]) -> String {
    let items = publications
        .iter()
        .map(|p| {
            let mut text = escape_latex(&p.title);
            if present(&p.venue) {
                text.push_str(&format!(", {}", escape_latex(&p.venue)));
            }
            if present(&p.year) {
                text.push_str(&format!(" ({})", escape_latex(&p.year)));
            }
            format!("\\item {text}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("\\Needspace{{6\\baselineskip}}\n{heading}\n\\begin{{itemize}}\n{items}\n\\end{{itemize}}")
}

fn languages_section(heading: &str, languages: &[LanguageSkill]) -> String {
    let items = languages
        .iter()
        .map(|l| {
            format!(
                "\\item \\textbf{{{}:}} {}",
                escape_latex(&l.name),
                escape_latex(&l.level)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("\\Needspace{{4\\baselineskip}}\n{heading}\n\\begin{{itemize}}\n{items}\n\\end{{itemize}}")
}

fn projects_section(heading: &str, projects: &[Project]) -> String {
    let body = projects
        .iter()
        .map(|p| {
            let mut block = String::new();
            if present(&p.name) {
                block.push_str(&format!("\\textbf{{{}}}", escape_latex(&p.name)));
            }
            if present(&p.link) {
                block.push_str(&format!(" - {}", href(&p.link, "")));
            }
            if present(&p.description) {
                block.push_str(&format!("\n{}", escape_latex(&p.description)));
            }
            if !p.tech.is_empty() {
                block.push_str(&format!(
                    "\n\\textbf{{Tech:}} {}",
                    escape_latex(&p.tech.join(", "))
                ));
            }
            join_header_and_bullets(block, bullet_list(&p.bullets))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("\\Needspace{{8\\baselineskip}}\n{heading}\n\n{body}")
}

fn custom_sections_section(heading: &str, sections: &[CustomSection]) -> String {
    let body = sections
        .iter()
        .map(|section| {
            let mut parts = Vec::new();
            if present(&section.title) {
                parts.push(format!("\\subsection*{{{}}}", escape_latex(&section.title)));
            }

            let items = section
                .items
                .iter()
                .map(|item| {
                    let mut line = String::new();
                    if present(&item.heading) {
                        line.push_str(&format!("\\textbf{{{}}}", escape_latex(&item.heading)));
                    }
                    if present(&item.subheading) {
                        line.push_str(&format!(" - {}", escape_latex(&item.subheading)));
                    }
                    join_header_and_bullets(line, bullet_list(&item.bullets))
                })
                .collect::<Vec<_>>()
                .join("\n\n");
            if !items.is_empty() {
                parts.push(items);
            }

            parts.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("\\Needspace{{6\\baselineskip}}\n{heading}\n\n{body}")
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

fn present(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Two dates joined with an en-dash, a single date, or empty.
fn date_range(start: &str, end: &str) -> String {
    [start, end]
        .iter()
        .filter(|d| present(d))
        .map(|d| d.trim())
        .collect::<Vec<_>>()
        .join("–")
}

/// An itemize block, or empty when there are no items — never an empty
/// `\begin{itemize}` shell.
fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let lines = items
        .iter()
        .map(|b| format!("\\item {}", escape_latex(b)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("\\begin{{itemize}}\n{lines}\n\\end{{itemize}}")
}

/// Entry header plus its bullet block; a headerless empty block collapses so
/// entries without bullets carry no trailing blank line.
fn join_header_and_bullets(header: String, bullets: String) -> String {
    if bullets.is_empty() {
        header
    } else if header.is_empty() {
        bullets
    } else {
        format!("{header}\n{bullets}")
    }
}

fn divider() -> String {
    "\\vspace{4pt}\n\\noindent\\color{black}\\rule{\\textwidth}{0.4pt}\n\\vspace{-4pt}".to_string()
}

const PREAMBLE: &str = r"\documentclass[a4paper,10pt]{article}
\usepackage[top=0.4in,bottom=0.6in,left=0.75in,right=0.75in]{geometry}
\usepackage{hyperref}
\usepackage{xcolor}
\usepackage{fontawesome5}
\usepackage{enumitem}
\usepackage{needspace}
\pagestyle{empty}
\setlist[itemize]{noitemsep, topsep=0pt, left=1.5em}";

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
