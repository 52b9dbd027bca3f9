//! Document Renderer — pure mapping from a `ResumeRecord` to a complete,
//! self-contained LaTeX document (Developer CV template, French headings).
//!
//! Deterministic: same record, byte-identical output. No I/O, no logging,
//! no clock. Every free-text value passes through `escape_latex` before it
//! is embedded; optional collections are normalized to concrete sequences
//! once at entry so the section builders never check for absence.
//!
//! Per-section heading policy (pinned by tests, do not "fix"):
//! Certificat and Langues always emit their heading, even with zero
//! entries; Projets, Intérêts and Qualités disappear entirely when empty.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::models::resume::{
    Certification, Education, Project, ResumeRecord, SkillGroup, WorkExperience,
};
use crate::render::escape::escape_latex;

// ────────────────────────────────────────────────────────────────────────────
// Fixed template text
// ────────────────────────────────────────────────────────────────────────────

const PREAMBLE: &str = r"\documentclass[9pt]{extarticle}

%----------------------------------------------------------------------------------------
%   PACKAGES AND DOCUMENT CONFIGURATIONS
%----------------------------------------------------------------------------------------

\usepackage[hidelinks]{hyperref}
\pagestyle{empty}

\usepackage{moresize}
\usepackage{enumitem}
\usepackage{geometry}
\geometry{
    paper=a4paper,
    top=1.6cm,
    bottom=1.6cm,
    left=1.4cm,
    right=1.6cm,
    headheight=0.75cm,
    footskip=1cm,
    headsep=0.5cm
}

\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[default]{raleway}
\renewcommand*\familydefault{\sfdefault}

\usepackage{fontawesome}

% Icon in a fixed-size box followed by caption text
\newcommand{\icon}[3]{%
    \vcenteredhbox{\colorbox{white}{\makebox(#2, #2){\textcolor{black}{\Large\csname fa#1\endcsname}}}}%
    \hspace{0.1cm}%
    \vcenteredhbox{\textcolor{black}{#3}}%
}

\usepackage{tikz}
\usetikzlibrary{shapes, backgrounds}
\tikzset{x=1cm, y=1cm}

% Vertically centre content
\newcommand{\vcenteredhbox}[1]{%
    \begingroup%
        \setbox0=\hbox{#1}\parbox{\wd0}{\box0}%
    \endgroup%
}

%----------------------------------------------------------------------------------------
%   CUSTOM SECTION COMMANDS
%----------------------------------------------------------------------------------------
\def\Vhrulefill{\leavevmode\leaders\hrule height 0.7ex depth \dimexpr0.4pt-0.7ex\hfill\kern0pt}

\newcommand{\cvsect}[1]{%
    \vspace{\baselineskip}%
    \textcolor{black}{\MakeUppercase{\textbf{#1}}} \hspace{4pt} \Vhrulefill \\
}

%----------------------------------------------------------------------------------------
%   ENTRY LIST ENVIRONMENT
%----------------------------------------------------------------------------------------
\usepackage{longtable}
\setlength{\LTpre}{0pt}
\setlength{\LTpost}{0pt}
\setlength{\tabcolsep}{0pt}

\newenvironment{entrylist}{%
    \begin{longtable}{@{}p{0.15\textwidth}p{0.85\textwidth}@{}}
}{%
    \end{longtable}
}

\newcommand{\entry}[4]{%
    \parbox[t]{0.15\textwidth}{\small #1}%
    &\parbox[t]{0.85\textwidth}{\textbf{#2}\hfill{\footnotesize \textbf{\textcolor{black}{#3}}}\\ #4}\\%
}

\newcommand{\slashsep}{\hspace{3mm}/\hspace{3mm}}

%----------------------------------------------------------------------------------------
%   BEGIN DOCUMENT
%----------------------------------------------------------------------------------------

\begin{document}
";

const BANNER_RULE: &str =
    "%----------------------------------------------------------------------------------------\n";

const HEADER_TEMPLATE: &str = r"\makebox[\textwidth]{
\begin{minipage}[t]{0.25\textwidth}
  \vspace{-\baselineskip}
  \vspace{20pt}
  \fontsize{15}{20}
  \textcolor{black}{\textbf{\parbox[t]{\linewidth}{\MakeUppercase{{position}}}}}

  \vspace{6pt}

  {\MakeUppercase{{name}}}
\end{minipage}
\hfill
\begin{minipage}[t]{0.2\textwidth}
  \vspace{-\baselineskip}
  \vspace{20pt}
{left_contact}\end{minipage}
\begin{minipage}[t]{0.27\textwidth}
  \vspace{-\baselineskip}
  \vspace{20pt}
{right_contact}\end{minipage}
}
";

const SUMMARY_SKILLS_TEMPLATE: &str = r"\begin{minipage}[t]{0.46\textwidth}
    \cvsect{Résumé}
    \vspace{1pt}
    {summary}
\end{minipage}
\hfill
\begin{minipage}[t]{0.465\textwidth}
    \cvsect{Compétences}
    \vspace{1pt}
{skill_groups}\end{minipage}
";

const SKILL_GROUP_TEMPLATE: &str = r"    \begin{minipage}[t]{0.2\textwidth}
        \textbf{{title}}:\vspace{-5pt}
    \end{minipage}
    \hfill
    \begin{minipage}[t]{0.73\textwidth}
        {list}\vspace{3pt}
    \end{minipage}
";

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// The record after the normalize pass: scalars defaulted to empty strings,
/// social links resolved to at most one per platform, dual-form entries
/// flattened to their structured shape.
struct Normalized<'a> {
    name: &'a str,
    position: &'a str,
    summary: &'a str,
    email: &'a str,
    address: &'a str,
    contact_information: &'a str,
    linkedin: Option<&'a str>,
    github: Option<&'a str>,
    education: &'a [Education],
    work_experience: &'a [WorkExperience],
    skills: &'a [SkillGroup],
    projects: &'a [Project],
    certifications: Vec<Certification>,
    languages: Vec<String>,
    qualities: &'a [String],
    interests: &'a [String],
}

fn normalize(resume: &ResumeRecord) -> Normalized<'_> {
    Normalized {
        name: resume.name.as_deref().unwrap_or(""),
        position: resume.position.as_deref().unwrap_or(""),
        summary: resume.summary.as_deref().unwrap_or(""),
        email: resume.email.as_deref().unwrap_or(""),
        address: resume.address.as_deref().unwrap_or(""),
        contact_information: resume.contact_information.as_deref().unwrap_or(""),
        linkedin: resume.social_link("LinkedIn"),
        github: resume.social_link("Github"),
        education: &resume.education,
        work_experience: &resume.work_experience,
        skills: &resume.skills,
        projects: &resume.projects,
        certifications: resume.certifications.iter().map(|c| c.normalized()).collect(),
        languages: resume.languages.iter().map(|l| l.normalized()).collect(),
        qualities: &resume.qualities,
        interests: &resume.interests,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Date helpers
// ────────────────────────────────────────────────────────────────────────────

/// Accepts the formats the form emits: `YYYY-MM-DD` date inputs, full
/// RFC 3339 timestamps from older blobs, or a bare 4-digit year.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1);
    }
    None
}

fn year_of(value: Option<&str>) -> Option<i32> {
    parse_date(value?).map(|d| d.year())
}

fn month_year_of(value: Option<&str>) -> Option<String> {
    parse_date(value?).map(|d| d.format("%b %Y").to_string())
}

/// Year-only date cell: `2020 - 2022`, or a single year when the other end
/// is absent or unparseable, or empty when neither parses.
fn year_range(start: Option<&str>, end: Option<&str>) -> String {
    match (year_of(start), year_of(end)) {
        (Some(s), Some(e)) => format!("{s} - {e}"),
        (Some(s), None) => s.to_string(),
        (None, Some(e)) => e.to_string(),
        (None, None) => String::new(),
    }
}

/// Month/year date cell for projects: `Jan 2020 - Jun 2020`.
fn month_year_range(start: Option<&str>, end: Option<&str>) -> String {
    match (month_year_of(start), month_year_of(end)) {
        (Some(s), Some(e)) => format!("{s} - {e}"),
        (Some(s), None) => s,
        (None, Some(e)) => e,
        (None, None) => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

/// Renders the full LaTeX document for a résumé record.
///
/// Total over well-typed input: a fully empty record still yields a
/// complete, balanced document ending in `\end{document}`.
pub fn render(resume: &ResumeRecord) -> String {
    let r = normalize(resume);
    let mut out = String::with_capacity(8 * 1024);

    out.push_str(PREAMBLE);

    push_banner(&mut out, "TITLE AND CONTACT INFORMATION");
    out.push_str(&header_section(&r));

    push_banner(&mut out, "INTRODUCTION & SKILLS");
    out.push_str(&summary_skills_section(&r));

    push_banner(&mut out, "EDUCATION");
    out.push_str("\\vspace{0pt}\n\\cvsect{Éducation}\n\\begin{entrylist}\n");
    for edu in r.education {
        out.push_str(&education_entry(edu));
    }
    out.push_str("\\end{entrylist}\n");

    push_banner(&mut out, "EXPERIENCE");
    out.push_str("\\vspace{-10pt}\n\\cvsect{Expérience}\n\\begin{entrylist}\n");
    for exp in r.work_experience {
        out.push_str(&experience_entry(exp));
    }
    out.push_str("\\end{entrylist}\n");

    if !r.projects.is_empty() {
        push_banner(&mut out, "PROJECTS");
        out.push_str("\\vspace{-20pt}\n\\cvsect{Projets}\n\\begin{entrylist}\n");
        for proj in r.projects {
            out.push_str(&project_entry(proj));
        }
        out.push_str("\\end{entrylist}\n");
    }

    // Heading stays even with zero entries.
    push_banner(&mut out, "CERTIFICATIONS");
    out.push_str("\\vspace{-20pt}\n\\cvsect{Certificat}\n\\begin{entrylist}\n");
    for cert in &r.certifications {
        out.push_str(&certification_entry(cert));
    }
    out.push_str("\\end{entrylist}\n");

    if !r.interests.is_empty() {
        let joined = r
            .interests
            .iter()
            .map(|i| escape_latex(i))
            .collect::<Vec<_>>()
            .join(", ");
        push_banner(&mut out, "INTERESTS");
        out.push_str(&format!(
            "\\vspace{{-10pt}}\n\\cvsect{{Intérêts}}\n\\vspace{{0pt}}\n\\hspace{{26mm}} \\textbf{{{joined}}}\n"
        ));
    }

    if !r.qualities.is_empty() {
        let joined = r
            .qualities
            .iter()
            .map(|q| escape_latex(q))
            .collect::<Vec<_>>()
            .join(" - ");
        push_banner(&mut out, "QUALITIES");
        out.push_str(&format!(
            "\\vspace{{-10pt}}\n\\cvsect{{Qualités}}\n\\vspace{{0pt}}\n\\hspace{{25mm}} \\textbf{{{joined}}} \\\\\n"
        ));
    }

    // Langues mirrors Certificat: heading and (possibly empty) line always emitted.
    let joined_languages = r
        .languages
        .iter()
        .map(|l| escape_latex(l))
        .collect::<Vec<_>>()
        .join(", ");
    push_banner(&mut out, "LANGUAGES");
    out.push_str(&format!(
        "\\vspace{{-10pt}}\n\\cvsect{{Langues}}\n\\vspace{{-0pt}}\n\\hspace{{26mm}} \\textbf{{{joined_languages}}}\n"
    ));

    out.push_str("\n\\end{document}\n");
    out
}

fn push_banner(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(BANNER_RULE);
    out.push_str("%   ");
    out.push_str(title);
    out.push('\n');
    out.push_str(BANNER_RULE);
    out.push('\n');
}

// ────────────────────────────────────────────────────────────────────────────
// Section builders
// ────────────────────────────────────────────────────────────────────────────

fn header_section(r: &Normalized) -> String {
    // The first space of the position becomes a line break so the title
    // wraps in the narrow left column.
    let position = escape_latex(r.position).replacen(' ', "\\\\ \\vspace{0pt}", 1);
    let name = escape_latex(r.name);

    // Fixed order: phone, address, email, LinkedIn, GitHub. Absent fields
    // contribute zero lines.
    let mut left_contact = String::new();
    if !r.contact_information.is_empty() {
        left_contact.push_str(&icon_line("Phone", &escape_latex(r.contact_information)));
    }
    if !r.address.is_empty() {
        left_contact.push_str(&icon_line("MapMarker", &escape_latex(r.address)));
    }

    let mut right_contact = String::new();
    if !r.email.is_empty() {
        let email = escape_latex(r.email);
        right_contact.push_str(&icon_line(
            "Envelope",
            &format!("\\href{{mailto:{email}}}{{{email}}}"),
        ));
    }
    if let Some(link) = r.linkedin {
        let link = escape_latex(link);
        right_contact.push_str(&icon_line(
            "LinkedinSquare",
            &format!("\\href{{{link}}}{{{link}}}"),
        ));
    }
    if let Some(link) = r.github {
        let link = escape_latex(link);
        right_contact.push_str(&icon_line("Github", &format!("\\href{{{link}}}{{{link}}}")));
    }

    HEADER_TEMPLATE
        .replace("{position}", &position)
        .replace("{name}", &name)
        .replace("{left_contact}", &left_contact)
        .replace("{right_contact}", &right_contact)
}

fn icon_line(icon: &str, text: &str) -> String {
    format!("  \\icon{{{icon}}}{{11}}{{{text}}}\\\\\n")
}

fn summary_skills_section(r: &Normalized) -> String {
    let skill_groups: String = r.skills.iter().map(skill_group).collect();
    SUMMARY_SKILLS_TEMPLATE
        .replace("{summary}", &escape_latex(r.summary))
        .replace("{skill_groups}", &skill_groups)
}

fn skill_group(group: &SkillGroup) -> String {
    let list = group
        .skills
        .iter()
        .map(|s| escape_latex(s))
        .collect::<Vec<_>>()
        .join(", ");
    SKILL_GROUP_TEMPLATE
        .replace("{title}", &escape_latex(group.title.as_deref().unwrap_or("")))
        .replace("{list}", &list)
}

// Built with format! rather than placeholder substitution: the title cell
// carries raw LaTeX (e.g. \textbf{…} around a certification name), and a
// sequential replace would rescan that inserted text.
fn entry(date: &str, title: &str, subtitle: &str, body: &str) -> String {
    format!("\\entry\n    {{{date}}}\n    {{{title}}}\n    {{{subtitle}}}\n    {{{body}}}\n")
}

fn education_entry(edu: &Education) -> String {
    entry(
        &year_range(edu.start_year.as_deref(), edu.end_year.as_deref()),
        &escape_latex(edu.degree.as_deref().unwrap_or("")),
        &escape_latex(edu.school.as_deref().unwrap_or("")),
        &escape_latex(edu.description.as_deref().unwrap_or("")),
    )
}

fn experience_entry(exp: &WorkExperience) -> String {
    entry(
        &year_range(exp.start_year.as_deref(), exp.end_year.as_deref()),
        &escape_latex(exp.position.as_deref().unwrap_or("")),
        &escape_latex(exp.company.as_deref().unwrap_or("")),
        &experience_body(exp),
    )
}

/// Content cell for a work-experience entry: the description as prose, one
/// bullet per non-empty achievement line (the itemize environment is emitted
/// only when at least one bullet exists), then the environment tag as a
/// typewriter-styled suffix line.
fn experience_body(exp: &WorkExperience) -> String {
    let mut body = escape_latex(exp.description.as_deref().unwrap_or(""));

    let bullets: Vec<String> = exp
        .key_achievements
        .as_deref()
        .unwrap_or("")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(escape_latex)
        .collect();

    if !bullets.is_empty() {
        body.push_str("\n    \\begin{itemize}\n");
        for bullet in &bullets {
            body.push_str("    \\item ");
            body.push_str(bullet);
            body.push('\n');
        }
        body.push_str("    \\end{itemize}");
    }

    if let Some(env) = exp.environment.as_deref().filter(|e| !e.is_empty()) {
        body.push_str("\n    \\\\ \\texttt{");
        body.push_str(&escape_latex(env));
        body.push('}');
    }

    body
}

fn project_entry(proj: &Project) -> String {
    entry(
        &month_year_range(proj.start_date.as_deref(), proj.end_date.as_deref()),
        &escape_latex(proj.name.as_deref().unwrap_or("")),
        &escape_latex(proj.technologies.as_deref().unwrap_or("")),
        &escape_latex(proj.description.as_deref().unwrap_or("")),
    )
}

fn certification_entry(cert: &Certification) -> String {
    let name = escape_latex(cert.name.as_deref().unwrap_or(""));
    let mut body = escape_latex(cert.issuer.as_deref().unwrap_or(""));
    if let Some(score) = cert.score.as_deref().filter(|s| !s.is_empty()) {
        body.push_str(" - ");
        body.push_str(&escape_latex(score));
    }
    entry("", &format!("\\textbf{{{name}}}"), "", &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
