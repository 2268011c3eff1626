//! Analytics landing screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Default route after sign-in. Fires the summary, chart, and activity fetches
//! side by side on mount; each panel renders its own loading or error state.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::charts::{BarChart, PieChart};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, QUICK_LINKS, activity_badge_class, activity_label, summary_cards};
use crate::state::loadable::Loadable;
use crate::util::dates::format_date;
use crate::util::session;
use crate::util::task::MountGuard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AdminLayout title="Dashboard">
            <DashboardScreen/>
        </AdminLayout>
    }
}

#[component]
fn DashboardScreen() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(DashboardState::default());
    let guard = MountGuard::new();
    let token = session::current_token(auth);

    let summary_token = token.clone();
    guard.spawn(async move { api::fetch_dashboard_summary(&summary_token).await }, move |result| {
        let result = session::check_result(auth, "dashboard summary", result);
        state.update(|s| s.summary = Loadable::from_result(result));
    });
    let charts_token = token.clone();
    guard.spawn(async move { api::fetch_dashboard_charts(&charts_token).await }, move |result| {
        let result = session::check_result(auth, "dashboard charts", result);
        state.update(|s| s.charts = Loadable::from_result(result));
    });
    guard.spawn(async move { api::fetch_recent_activity(&token).await }, move |result| {
        let result = session::check_result(auth, "recent activity", result);
        state.update(|s| s.activity = Loadable::from_result(result));
    });

    let summary_panel = move || {
        state.with(|s| {
            if let Some(error) = s.summary.error() {
                return view! { <p class="panel__error">{format!("Could not load summary: {error}")}</p> }.into_any();
            }
            let Some(summary) = s.summary.ready() else {
                return view! { <p class="panel__loading">"Loading summary..."</p> }.into_any();
            };
            summary_cards(summary)
                .into_iter()
                .map(|card| {
                    view! {
                        <div class=format!("summary-card summary-card--{}", card.tone)>
                            <span class="summary-card__label">{card.label}</span>
                            <span class="summary-card__value">{card.value}</span>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let charts_panel = move || {
        state.with(|s| {
            if let Some(error) = s.charts.error() {
                return view! { <p class="panel__error">{format!("Could not load charts: {error}")}</p> }.into_any();
            }
            let Some(charts) = s.charts.ready() else {
                return view! { <p class="panel__loading">"Loading charts..."</p> }.into_any();
            };
            view! {
                <PieChart title="Visitor vs Exhibitor" slices=charts.pie.clone()/>
                <BarChart title="Stalls Booked Over Time" points=charts.bar.clone()/>
            }
                .into_any()
        })
    };

    let activity_panel = move || {
        state.with(|s| {
            if let Some(error) = s.activity.error() {
                return view! { <p class="panel__error">{format!("Could not load activity: {error}")}</p> }
                    .into_any();
            }
            let Some(rows) = s.activity.ready() else {
                return view! { <p class="panel__loading">"Loading activity..."</p> }.into_any();
            };
            if rows.is_empty() {
                return view! { <p class="panel__empty">"No recent activity."</p> }.into_any();
            }
            let body = rows
                .iter()
                .map(|row| {
                    view! {
                        <tr>
                            <td>{row.name.clone()}</td>
                            <td>
                                <span class=activity_badge_class(row.kind)>{activity_label(row.kind)}</span>
                            </td>
                            <td>{format_date(Some(row.date.as_str()))}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            }
                .into_any()
        })
    };

    view! {
        <section class="dashboard">
            <div class="dashboard__cards">{summary_panel}</div>
            <div class="dashboard__charts">{charts_panel}</div>
            <div class="dashboard__lower">
                <div class="panel">
                    <h2 class="panel__title">"Recent Activity"</h2>
                    {activity_panel}
                </div>
                <div class="panel">
                    <h2 class="panel__title">"Quick Access"</h2>
                    <div class="quick-access">
                        {QUICK_LINKS
                            .iter()
                            .map(|(label, path)| {
                                view! {
                                    <a class="btn quick-access__link" href={*path}>
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
