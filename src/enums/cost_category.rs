use crate::common::*;

#[doc = r#"
    Cost categories drawn on the chart, in stacking order.

    The first six are matched verbatim against the `SERVICE` dimension returned by
    Cost Explorer. `Others` is never matched by name; it is derived per day as
    `day_total - tracked_subtotal`.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    RelationalDatabase,
    VirtualPrivateCloud,
    DatabaseMigration,
    Ec2Other,
    SupportDeveloper,
    Tax,
    Others,
}

impl CostCategory {
    pub const TRACKED: [CostCategory; 6] = [
        CostCategory::RelationalDatabase,
        CostCategory::VirtualPrivateCloud,
        CostCategory::DatabaseMigration,
        CostCategory::Ec2Other,
        CostCategory::SupportDeveloper,
        CostCategory::Tax,
    ];

    pub const ALL: [CostCategory; 7] = [
        CostCategory::RelationalDatabase,
        CostCategory::VirtualPrivateCloud,
        CostCategory::DatabaseMigration,
        CostCategory::Ec2Other,
        CostCategory::SupportDeveloper,
        CostCategory::Tax,
        CostCategory::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::RelationalDatabase => "Amazon Relational Database Service",
            CostCategory::VirtualPrivateCloud => "Amazon Virtual Private Cloud",
            CostCategory::DatabaseMigration => "AWS Database Migration Service",
            CostCategory::Ec2Other => "EC2 - Other",
            CostCategory::SupportDeveloper => "AWS Support (Developer)",
            CostCategory::Tax => "Tax",
            CostCategory::Others => "Others",
        }
    }

    #[doc = "Row position of the category inside a usage table"]
    pub fn index(&self) -> usize {
        *self as usize
    }

    #[doc = "Exact-match lookup of a Cost Explorer service name among the tracked categories"]
    pub fn from_service_name(service_name: &str) -> Option<Self> {
        Self::TRACKED
            .iter()
            .copied()
            .find(|category| category.label() == service_name)
    }
}

impl Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
