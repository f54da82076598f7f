use strum::{AsRefStr, Display, EnumString};

/// values of OSM access tags that this importer understands. each resolves to
/// either allowing or denying the tagged mode(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AccessPermission {
    Yes,
    Permissive,
    UseSidepath,
    Designated,
    Dismount,
    Discouraged,
    Destination,
    Customers,
    Official,
    Private,
    No,
    Agricultural,
    Delivery,
    Forestry,
    Emergency,
    Service,
}

impl AccessPermission {
    /// parses a tag value. `None` for values outside the permission table.
    pub fn parse(value: &str) -> Option<AccessPermission> {
        value.trim().parse::<AccessPermission>().ok()
    }

    pub fn allows(&self) -> bool {
        use AccessPermission as A;
        match self {
            A::Yes
            | A::Permissive
            | A::UseSidepath
            | A::Designated
            | A::Dismount
            | A::Discouraged
            | A::Destination
            | A::Customers
            | A::Official => true,
            A::Private
            | A::No
            | A::Agricultural
            | A::Delivery
            | A::Forestry
            | A::Emergency
            | A::Service => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_table() {
        for v in ["yes", "use_sidepath", "customers", "official", "dismount"] {
            assert_eq!(AccessPermission::parse(v).map(|p| p.allows()), Some(true), "{v}");
        }
        for v in ["private", "no", "agricultural", "emergency", "service"] {
            assert_eq!(AccessPermission::parse(v).map(|p| p.allows()), Some(false), "{v}");
        }
        assert_eq!(AccessPermission::parse("military"), None);
        assert_eq!(AccessPermission::parse(""), None);
    }
}
