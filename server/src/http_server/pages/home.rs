use maud::{html, Markup};

use crate::http_server::templates::base;

pub(crate) async fn home_page() -> Markup {
    base(html! {
        h1 { "convos" }

        p {
            "Reassembled reply threads for a twitter handle."
        }

        p {
            "Fetch a handle's recent conversations as JSON from "
            code { "/convos/<handle>" }
            "."
        }
    })
}
