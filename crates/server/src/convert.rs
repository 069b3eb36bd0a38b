//! Mapping between engine types and wire types.

use api_types::{
    bank_account::BankAccountView,
    budget::{BudgetEntryView, BudgetLineView},
    directory::{NeighborView, PropertyCodeView, ServiceProviderView},
    document::DocumentView,
    feedback::FeedbackView,
    maintenance::MaintenanceView,
    property::PropertyView,
    prospect::ProspectView,
    scenario::{ScenarioAnalysisView, ScenarioView},
    tenant::TenantView,
    transaction::TransactionView,
};
use engine::Money;

/// Wire enum to engine enum.
pub(crate) trait ToEngine {
    type Output;
    fn to_engine(self) -> Self::Output;
}

/// Engine enum to wire enum.
pub(crate) trait ToApi {
    type Output;
    fn to_api(self) -> Self::Output;
}

/// Both enums must list the same variants; a mismatch fails to compile.
macro_rules! map_enum {
    ($module:ident :: $name:ident { $($variant:ident),+ $(,)? }) => {
        impl ToEngine for api_types::$module::$name {
            type Output = engine::$name;

            fn to_engine(self) -> engine::$name {
                match self {
                    $(Self::$variant => engine::$name::$variant),+
                }
            }
        }

        impl ToApi for engine::$name {
            type Output = api_types::$module::$name;

            fn to_api(self) -> api_types::$module::$name {
                match self {
                    $(Self::$variant => api_types::$module::$name::$variant),+
                }
            }
        }
    };
}

map_enum!(property::PropertyType {
    SingleFamily,
    MultiFamily,
    Condo,
    Townhouse,
    Commercial,
});
map_enum!(property::PropertyStatus {
    Vacant,
    Occupied,
    Renovation,
    Listed,
});
map_enum!(prospect::ProspectStatus {
    New,
    Contacted,
    ShowingScheduled,
    Applied,
    Approved,
    Rejected,
    Converted,
});
map_enum!(tenant::TenantStatus { Active, Notice, Past });
map_enum!(transaction::TransactionKind { Income, Expense });
map_enum!(maintenance::MaintenancePriority {
    Low,
    Medium,
    High,
    Urgent,
});
map_enum!(maintenance::MaintenanceStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
});
map_enum!(document::DocumentType {
    Lease,
    Application,
    Inspection,
    Insurance,
    Receipt,
    Tax,
    Other,
});
map_enum!(feedback::FeedbackCategory { Bug, Feature, Other });
map_enum!(bank_account::AccountType {
    Checking,
    Savings,
    Credit,
});

pub(crate) fn money(minor: i64) -> Money {
    Money::new(minor)
}

pub(crate) fn property_view(p: engine::Property) -> PropertyView {
    PropertyView {
        id: p.id,
        name: p.name,
        address: p.address,
        city: p.city,
        state: p.state,
        zip: p.zip,
        property_type: p.property_type.to_api(),
        status: p.status.to_api(),
        bedrooms: p.bedrooms,
        bathrooms: p.bathrooms,
        square_feet: p.square_feet,
        purchase_price_minor: p.purchase_price.map(Money::cents),
        purchase_date: p.purchase_date,
        current_value_minor: p.current_value.map(Money::cents),
        monthly_rent_minor: p.monthly_rent.cents(),
        notes: p.notes,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

pub(crate) fn prospect_view(p: engine::Prospect) -> ProspectView {
    ProspectView {
        id: p.id,
        property_id: p.property_id,
        first_name: p.first_name,
        last_name: p.last_name,
        email: p.email,
        phone: p.phone,
        status: p.status.to_api(),
        source: p.source,
        desired_move_in: p.desired_move_in,
        notes: p.notes,
        created_at: p.created_at,
    }
}

pub(crate) fn tenant_view(t: engine::Tenant) -> TenantView {
    TenantView {
        id: t.id,
        property_id: t.property_id,
        first_name: t.first_name,
        last_name: t.last_name,
        email: t.email,
        phone: t.phone,
        lease_start: t.lease_start,
        lease_end: t.lease_end,
        monthly_rent_minor: t.monthly_rent.cents(),
        security_deposit_minor: t.security_deposit.cents(),
        status: t.status.to_api(),
        created_at: t.created_at,
    }
}

pub(crate) fn transaction_view(t: engine::Transaction) -> TransactionView {
    TransactionView {
        id: t.id,
        property_id: t.property_id,
        tenant_id: t.tenant_id,
        bank_account_id: t.bank_account_id,
        kind: t.kind.to_api(),
        category: t.category,
        amount_minor: t.amount.cents(),
        occurred_on: t.occurred_on,
        description: t.description,
        created_at: t.created_at,
    }
}

pub(crate) fn maintenance_view(m: engine::MaintenanceRecord) -> MaintenanceView {
    MaintenanceView {
        id: m.id,
        property_id: m.property_id,
        service_provider_id: m.service_provider_id,
        title: m.title,
        description: m.description,
        priority: m.priority.to_api(),
        status: m.status.to_api(),
        cost_minor: m.cost.map(Money::cents),
        reported_on: m.reported_on,
        completed_on: m.completed_on,
    }
}

pub(crate) fn document_view(d: engine::Document) -> DocumentView {
    DocumentView {
        id: d.id,
        name: d.name,
        doc_type: d.doc_type.to_api(),
        file_url: d.file_url,
        property_id: d.property_id,
        prospect_id: d.prospect_id,
        uploaded_at: d.uploaded_at,
    }
}

pub(crate) fn scenario_view(s: engine::ProformaScenario) -> ScenarioView {
    ScenarioView {
        id: s.id,
        property_id: s.property_id,
        name: s.name,
        purchase_price_minor: s.purchase_price.cents(),
        down_payment_percent: s.down_payment_percent,
        interest_rate_percent: s.interest_rate_percent,
        loan_term_years: s.loan_term_years,
        monthly_rent_minor: s.monthly_rent.cents(),
        vacancy_rate_percent: s.vacancy_rate_percent,
        monthly_expenses_minor: s.monthly_expenses.cents(),
        closing_costs_minor: s.closing_costs.cents(),
        created_at: s.created_at,
    }
}

pub(crate) fn analysis_view(a: engine::ScenarioAnalysis) -> ScenarioAnalysisView {
    ScenarioAnalysisView {
        down_payment_minor: a.down_payment.cents(),
        loan_amount_minor: a.loan_amount.cents(),
        monthly_mortgage_payment_minor: a.monthly_mortgage_payment.cents(),
        effective_monthly_income_minor: a.effective_monthly_income.cents(),
        monthly_net_operating_income_minor: a.monthly_net_operating_income.cents(),
        annual_net_operating_income_minor: a.annual_net_operating_income.cents(),
        monthly_cash_flow_minor: a.monthly_cash_flow.cents(),
        annual_cash_flow_minor: a.annual_cash_flow.cents(),
        total_cash_invested_minor: a.total_cash_invested.cents(),
        cap_rate_percent: a.cap_rate_percent,
        cash_on_cash_percent: a.cash_on_cash_percent,
    }
}

pub(crate) fn feedback_view(f: engine::FeedbackEntry) -> FeedbackView {
    FeedbackView {
        id: f.id,
        message: f.message,
        category: f.category.to_api(),
        page: f.page,
        resolved: f.resolved,
        created_at: f.created_at,
    }
}

pub(crate) fn bank_account_view(b: engine::BankAccount) -> BankAccountView {
    BankAccountView {
        id: b.id,
        name: b.name,
        institution: b.institution,
        account_type: b.account_type.to_api(),
        last_four: b.last_four,
        balance_minor: b.balance.cents(),
        property_id: b.property_id,
    }
}

pub(crate) fn neighbor_view(n: engine::Neighbor) -> NeighborView {
    NeighborView {
        id: n.id,
        property_id: n.property_id,
        name: n.name,
        address: n.address,
        phone: n.phone,
        email: n.email,
        notes: n.notes,
    }
}

pub(crate) fn property_code_view(c: engine::PropertyCode) -> PropertyCodeView {
    PropertyCodeView {
        id: c.id,
        property_id: c.property_id,
        label: c.label,
        code: c.code,
        notes: c.notes,
    }
}

pub(crate) fn service_provider_view(s: engine::ServiceProvider) -> ServiceProviderView {
    ServiceProviderView {
        id: s.id,
        name: s.name,
        trade: s.trade,
        phone: s.phone,
        email: s.email,
        notes: s.notes,
    }
}

pub(crate) fn budget_entry_view(b: engine::BudgetEntry) -> BudgetEntryView {
    BudgetEntryView {
        id: b.id,
        property_id: b.property_id,
        category: b.category,
        year: b.year,
        month: b.month,
        planned_amount_minor: b.planned_amount.cents(),
    }
}

pub(crate) fn budget_line_view(line: engine::BudgetLine) -> BudgetLineView {
    BudgetLineView {
        remaining_minor: line.remaining().cents(),
        category: line.category,
        planned_minor: line.planned.cents(),
        actual_minor: line.actual.cents(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_map_both_ways() {
        let wire = api_types::maintenance::MaintenanceStatus::InProgress;
        let engine_status = wire.to_engine();
        assert_eq!(engine_status, engine::MaintenanceStatus::InProgress);
        assert_eq!(engine_status.to_api(), wire);
    }

    #[test]
    fn budget_line_reports_remaining() {
        let view = budget_line_view(engine::BudgetLine {
            category: "repairs".to_string(),
            planned: Money::new(50_000),
            actual: Money::new(62_500),
        });
        assert_eq!(view.remaining_minor, -12_500);
    }
}
