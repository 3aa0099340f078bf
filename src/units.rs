/// Unit categories and projectile mapping
///
/// External loaders supply unit descriptors as free-form type strings; the
/// catalog resolves them to a category. Unknown or absent values fall back
/// to riflemen (bullet visuals, rifle sound) rather than erroring.
use std::collections::HashMap;
use std::fmt;

/// Combat unit categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Rifleman,
    Commando,
    MachineGunner,
    Sniper,
    LightTank,
    Tank,
    Artillery,
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitCategory::Rifleman => write!(f, "Rifleman"),
            UnitCategory::Commando => write!(f, "Commando"),
            UnitCategory::MachineGunner => write!(f, "Machine Gunner"),
            UnitCategory::Sniper => write!(f, "Sniper"),
            UnitCategory::LightTank => write!(f, "Light Tank"),
            UnitCategory::Tank => write!(f, "Tank"),
            UnitCategory::Artillery => write!(f, "Artillery"),
        }
    }
}

/// Projectile visual styles; tank and light tank share the oblong shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectileType {
    Bullet,
    Burst,
    Tracer,
    SniperRound,
    Shell,
    ArtilleryShell,
}

impl UnitCategory {
    /// Visual style for shots fired by this category
    pub fn projectile(&self) -> ProjectileType {
        match self {
            UnitCategory::Rifleman => ProjectileType::Bullet,
            UnitCategory::Commando => ProjectileType::Burst,
            UnitCategory::MachineGunner => ProjectileType::Tracer,
            UnitCategory::Sniper => ProjectileType::SniperRound,
            UnitCategory::LightTank => ProjectileType::Shell,
            UnitCategory::Tank => ProjectileType::Shell,
            UnitCategory::Artillery => ProjectileType::ArtilleryShell,
        }
    }

    /// Sound id played when this category fires
    pub fn weapon_sound(&self) -> &'static str {
        match self {
            UnitCategory::Rifleman => "shot_rifle",
            UnitCategory::Commando => "shot_burst",
            UnitCategory::MachineGunner => "shot_mg",
            UnitCategory::Sniper => "shot_sniper",
            UnitCategory::LightTank => "shot_cannon",
            UnitCategory::Tank => "shot_cannon",
            UnitCategory::Artillery => "shot_artillery",
        }
    }

    /// Vehicles take spark hits and explode on destruction; infantry bleed
    pub fn is_vehicle(&self) -> bool {
        matches!(
            self,
            UnitCategory::LightTank | UnitCategory::Tank | UnitCategory::Artillery
        )
    }

    /// Heavy vehicles get the large destruction explosion
    pub fn is_heavy(&self) -> bool {
        matches!(self, UnitCategory::Tank | UnitCategory::Artillery)
    }
}

/// Mapping from unit-type strings to categories, supplied by the host
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    categories: HashMap<String, UnitCategory>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unit_type: impl Into<String>, category: UnitCategory) {
        self.categories.insert(unit_type.into(), category);
    }

    /// Resolve a unit-type string; missing or unknown values degrade to the
    /// rifleman default and are never an error.
    pub fn resolve(&self, unit_type: Option<&str>) -> UnitCategory {
        match unit_type {
            Some(t) => match self.categories.get(t) {
                Some(category) => *category,
                None => {
                    tracing::debug!("Unknown unit type '{}', defaulting to rifleman", t);
                    UnitCategory::Rifleman
                }
            },
            None => UnitCategory::Rifleman,
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> UnitCatalog {
        let mut catalog = UnitCatalog::new();
        catalog.insert("rifleman", UnitCategory::Rifleman);
        catalog.insert("tank", UnitCategory::Tank);
        catalog.insert("sniper", UnitCategory::Sniper);
        catalog
    }

    #[test]
    fn test_resolve_known_type() {
        assert_eq!(catalog().resolve(Some("tank")), UnitCategory::Tank);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_rifleman() {
        assert_eq!(catalog().resolve(Some("hovercraft")), UnitCategory::Rifleman);
        assert_eq!(catalog().resolve(None), UnitCategory::Rifleman);
    }

    #[test]
    fn test_projectile_mapping() {
        assert_eq!(UnitCategory::Rifleman.projectile(), ProjectileType::Bullet);
        assert_eq!(UnitCategory::Commando.projectile(), ProjectileType::Burst);
        assert_eq!(UnitCategory::Tank.projectile(), ProjectileType::Shell);
        assert_eq!(UnitCategory::LightTank.projectile(), ProjectileType::Shell);
        assert_eq!(
            UnitCategory::Artillery.projectile(),
            ProjectileType::ArtilleryShell
        );
    }

    #[test]
    fn test_vehicle_split() {
        assert!(UnitCategory::Tank.is_vehicle());
        assert!(UnitCategory::LightTank.is_vehicle());
        assert!(!UnitCategory::Sniper.is_vehicle());
        assert!(UnitCategory::Tank.is_heavy());
        assert!(!UnitCategory::LightTank.is_heavy());
    }
}
