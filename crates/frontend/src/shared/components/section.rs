use leptos::prelude::*;

/// Root wrapper for every dashboard section.
///
/// Sets the anchor id the floating nav links to and the
/// `dashboard-section` class the scroll-reveal observer watches; sections
/// start transparent and slide in when the visible modifier is added.
#[component]
pub fn DashboardSection(
    /// Anchor id, e.g. `"store-performance"`.
    id: &'static str,
    /// Section heading.
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="dashboard-section">
            <h2 class="dashboard-section__title">{title}</h2>
            {children()}
        </section>
    }
}
