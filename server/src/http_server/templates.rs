use maud::{html, Markup};

pub fn head() -> Markup {
    html! {
      head {
        title { "convos" }
        meta charset="utf-8";
      }
    }
}

pub fn base(inner: Markup) -> Markup {
    html! {
      (head())

      body {
        (inner)
      }
    }
}
