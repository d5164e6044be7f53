use api::Job;
use dioxus::prelude::*;

use crate::icons::{FaBuilding, FaLocationDot};
use crate::Icon;

/// Summary card for one job, with a single action button.
#[component]
pub fn JobCard(
    job: Job,
    action_label: String,
    onaction: EventHandler<Job>,
    #[props(default = false)] show_applied_count: bool,
) -> Element {
    let posted_on = job.posted_on();
    let skills = job.skills_line();
    let location = job.display_location().to_string();
    let applied = job.applied_count;
    let job_for_action = job.clone();

    rsx! {
        article {
            class: "job-card",
            h3 { class: "job-card-title", "{job.title}" }
            p {
                class: "job-card-meta",
                Icon { icon: FaBuilding, width: 12, height: 12 }
                span { "{job.company}" }
                Icon { icon: FaLocationDot, width: 12, height: 12 }
                span { "{location}" }
            }
            p { class: "job-card-description", "{job.description}" }
            p {
                class: "job-card-skills",
                strong { "Skills: " }
                "{skills}"
            }
            if let Some(date) = posted_on {
                p { class: "job-card-date", "Posted on {date}" }
            }
            if show_applied_count {
                p { class: "job-card-applied", "Applicants: {applied}" }
            }
            button {
                class: "btn btn--primary",
                onclick: move |_| onaction.call(job_for_action.clone()),
                "{action_label}"
            }
        }
    }
}
