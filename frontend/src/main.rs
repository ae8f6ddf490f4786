use shared::{BudgetResource, ExpenseResource, IncomeResource};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::expense_insights::ExpenseInsights;
use components::header::{Header, Page};
use components::income_dashboard::IncomeDashboard;
use components::income_reports::IncomeReports;
use components::login_page::LoginPage;
use components::resource_page::ResourcePage;
use components::toast::ToastView;
use hooks::use_entries::use_entries;
use hooks::use_session::use_session;
use hooks::use_toast::{use_toast, Toast};
use services::api::ApiClient;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct DashboardProps {
    api_client: ApiClient,
    notify: Callback<Toast>,
    user_name: Option<String>,
    on_logout: Callback<()>,
}

/// Signed-in shell: owns every fetched list and hands slices of it to the pages
#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let page = use_state(|| Page::Incomes);
    let incomes = use_entries::<IncomeResource>(&props.api_client, &props.notify);
    let expenses = use_entries::<ExpenseResource>(&props.api_client, &props.notify);
    let budgets = use_entries::<BudgetResource>(&props.api_client, &props.notify);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            Logger::debug_with_component("app", &format!("Navigating to {}", next.label()));
            page.set(next);
        })
    };

    let content = match *page {
        Page::Incomes => html! {
            <IncomeDashboard state={incomes.state.clone()} actions={incomes.actions.clone()} />
        },
        Page::IncomeReports => html! {
            <IncomeReports incomes={incomes.state.entries.clone()} api_client={props.api_client.clone()} />
        },
        Page::Expenses => html! {
            <ResourcePage<ExpenseResource>
                state={expenses.state.clone()}
                actions={expenses.actions.clone()}
                api_client={props.api_client.clone()}
            />
        },
        Page::ExpenseInsights => html! {
            <ExpenseInsights
                expenses={expenses.state.entries.clone()}
                budgets={budgets.state.entries.clone()}
                loading={expenses.state.loading || budgets.state.loading}
            />
        },
        Page::Budgets => html! {
            <ResourcePage<BudgetResource>
                state={budgets.state.clone()}
                actions={budgets.actions.clone()}
                api_client={props.api_client.clone()}
            />
        },
    };

    html! {
        <>
            <Header
                current={*page}
                on_navigate={on_navigate}
                user_name={props.user_name.clone()}
                on_logout={props.on_logout.clone()}
            />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let toast = use_toast();
    let session = use_session(&api_client, &toast.show);

    html! {
        <>
            <ToastView toast={toast.current.clone()} on_dismiss={toast.dismiss.clone()} />
            {if session.state.session.is_some() {
                html! {
                    <Dashboard
                        api_client={(*api_client).clone()}
                        notify={toast.show.clone()}
                        user_name={session.state.user_name.clone()}
                        on_logout={session.actions.logout.clone()}
                    />
                }
            } else {
                html! {
                    <LoginPage
                        on_login={session.actions.login.clone()}
                        on_register={session.actions.register.clone()}
                        submitting={session.state.submitting}
                    />
                }
            }}
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
