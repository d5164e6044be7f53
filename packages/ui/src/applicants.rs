use api::Applicant;
use dioxus::prelude::*;

/// Applicants for one job, as shown in the employer's drawer.
#[component]
pub fn ApplicantList(applicants: Vec<Applicant>) -> Element {
    if applicants.is_empty() {
        return rsx! {
            p { class: "empty-state", "No applicants yet." }
        };
    }

    rsx! {
        ul {
            class: "applicant-list",
            for applicant in applicants {
                li {
                    key: "{applicant.id}",
                    class: "applicant",
                    h4 { "{applicant.name()}" }
                    p { "Email: {applicant.email()}" }
                    p { "Phone: {applicant.phone()}" }
                    if let Some(date) = applicant.applied_on() {
                        p { "Applied on {date}" }
                    }
                    p { "Match score: {applicant.score_label()}" }
                    if let Some(url) = applicant.resume_url.clone() {
                        a { href: "{url}", target: "_blank", rel: "noopener", "View resume" }
                    }
                }
            }
        }
    }
}
