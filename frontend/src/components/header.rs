use yew::prelude::*;

/// Top-level views reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Incomes,
    IncomeReports,
    Expenses,
    ExpenseInsights,
    Budgets,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Incomes,
        Page::IncomeReports,
        Page::Expenses,
        Page::ExpenseInsights,
        Page::Budgets,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Incomes => "Income Dashboard",
            Page::IncomeReports => "Income Reports",
            Page::Expenses => "Expenses",
            Page::ExpenseInsights => "Budget Insights",
            Page::Budgets => "Budgets",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
    pub user_name: Option<String>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header no-print">
            <div class="container">
                <h1>{"Finance Tracker"}</h1>
                <nav class="header-nav">
                    {for Page::ALL.iter().map(|page| {
                        let page = *page;
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(page));
                        html! {
                            <button
                                class={classes!("nav-button", (page == props.current).then_some("active"))}
                                onclick={onclick}
                            >
                                {page.label()}
                            </button>
                        }
                    })}
                </nav>
                <div class="header-right">
                    {if let Some(name) = props.user_name.as_ref() {
                        html! { <span class="user-name">{name}</span> }
                    } else { html! {} }}
                    <button class="logout-button" onclick={on_logout}>{"Logout"}</button>
                </div>
            </div>
        </header>
    }
}
