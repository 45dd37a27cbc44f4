//! Catalogue enums shared by every layer of the engine
//!
//! Each enum has a stable declaration order. That order is used for the
//! observation channels and the action enumeration, so new variants must
//! only ever be appended.

use serde::{Deserialize, Serialize};

use crate::core::error::PlannerError;

/// Declares a closed catalogue enum with a lowercase wire tag per variant.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $tag:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(u8)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const COUNT: usize = Self::ALL.len();

            /// Position of this variant in `ALL`
            pub fn index(self) -> usize {
                self as usize
            }

            /// Lowercase tag used by the boundary map format
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = PlannerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    _ => Err(PlannerError::UnknownTag {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

catalog_enum! {
    /// Base terrain of a tile
    Terrain {
        Grassland => "grassland",
        Plains => "plains",
        Desert => "desert",
        Tundra => "tundra",
        Snow => "snow",
        Coast => "coast",
        Ocean => "ocean",
        Lake => "lake",
    }
}

impl Terrain {
    /// Coast, ocean and lake
    pub fn is_water(self) -> bool {
        matches!(self, Terrain::Coast | Terrain::Ocean | Terrain::Lake)
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Self::Grassland
    }
}

catalog_enum! {
    /// Terrain feature layered on top of the base terrain
    Feature {
        None => "none",
        Woods => "woods",
        Jungle => "jungle",
        Marsh => "marsh",
        Floodplains => "floodplains",
        Oasis => "oasis",
        Cliffs => "cliffs",
        Reef => "reef",
        GeothermalFissure => "geothermal_fissure",
        River => "river",
        Mountain => "mountain",
        Volcano => "volcano",
        VolcanicSoil => "volcanic_soil",
        IceCaps => "ice_caps",
    }
}

impl Default for Feature {
    fn default() -> Self {
        Self::None
    }
}

catalog_enum! {
    /// City district kinds. `None` marks an empty tile.
    District {
        None => "none",
        CityCenter => "city_center",
        Campus => "campus",
        TheaterSquare => "theater_square",
        HolySite => "holy_site",
        Encampment => "encampment",
        CommercialHub => "commercial_hub",
        Harbor => "harbor",
        IndustrialZone => "industrial_zone",
        Preserve => "preserve",
        EntertainmentComplex => "entertainment_complex",
        WaterPark => "water_park",
        Aqueduct => "aqueduct",
        Neighborhood => "neighborhood",
        Canal => "canal",
        Dam => "dam",
        Aerodrome => "aerodrome",
        Spaceport => "spaceport",
        GovernmentPlaza => "government_plaza",
        DiplomaticQuarter => "diplomatic_quarter",
    }
}

impl District {
    /// Districts an action can place (everything except `None`)
    pub fn placeable() -> impl Iterator<Item = District> {
        Self::ALL.iter().copied().filter(|d| *d != District::None)
    }

    /// The district that can never share a city with this one
    pub fn exclusive_with(self) -> Option<District> {
        match self {
            District::EntertainmentComplex => Some(District::WaterPark),
            District::WaterPark => Some(District::EntertainmentComplex),
            _ => None,
        }
    }
}

impl Default for District {
    fn default() -> Self {
        Self::None
    }
}

catalog_enum! {
    /// Tile improvements
    Improvement {
        None => "none",
        Farm => "farm",
        Mine => "mine",
        Quarry => "quarry",
        Plantation => "plantation",
        Camp => "camp",
        Pasture => "pasture",
        FishingBoats => "fishing_boats",
        LumberMill => "lumber_mill",
    }
}

impl Default for Improvement {
    fn default() -> Self {
        Self::None
    }
}

catalog_enum! {
    /// Map resources
    Resource {
        None => "none",
        Bananas => "bananas",
        Cattle => "cattle",
        Copper => "copper",
        Crabs => "crabs",
        Deer => "deer",
        Fish => "fish",
        Maize => "maize",
        Rice => "rice",
        Sheep => "sheep",
        Stone => "stone",
        Wheat => "wheat",
        Amber => "amber",
        Cinnamon => "cinnamon",
        Citrus => "citrus",
        Cloves => "cloves",
        Cocoa => "cocoa",
        Coffee => "coffee",
        Cosmetics => "cosmetics",
        Cotton => "cotton",
        Dyes => "dyes",
        Diamonds => "diamonds",
        Furs => "furs",
        Gypsum => "gypsum",
        Honey => "honey",
        Incense => "incense",
        Ivory => "ivory",
        Jade => "jade",
        Jeans => "jeans",
        Marble => "marble",
        Mercury => "mercury",
        Olives => "olives",
        Pearls => "pearls",
        Perfume => "perfume",
        Salt => "salt",
        Silk => "silk",
        Silver => "silver",
        Spices => "spices",
        Sugar => "sugar",
        Tea => "tea",
        Tobacco => "tobacco",
        Toys => "toys",
        Truffles => "truffles",
        Turtles => "turtles",
        Whales => "whales",
        Wine => "wine",
        Horses => "horses",
        Iron => "iron",
        Niter => "niter",
        Coal => "coal",
        Oil => "oil",
        Aluminum => "aluminum",
        Uranium => "uranium",
        AntiquitySite => "antiquity_site",
        Shipwreck => "shipwreck",
    }
}

impl Default for Resource {
    fn default() -> Self {
        Self::None
    }
}

catalog_enum! {
    /// Resource classification
    ResourceType {
        None => "none",
        Bonus => "bonus",
        Luxury => "luxury",
        Strategic => "strategic",
        Artifact => "artifact",
    }
}

impl Default for ResourceType {
    fn default() -> Self {
        Self::None
    }
}

catalog_enum! {
    /// Yield categories. Only the six scored yields appear in tile tables.
    YieldType {
        None => "none",
        Science => "science",
        Culture => "culture",
        Gold => "gold",
        Faith => "faith",
        Production => "production",
        Food => "food",
        Housing => "housing",
        Amenities => "amenities",
    }
}

impl YieldType {
    /// The six yields a tile or district can produce
    pub const SCORED: [YieldType; 6] = [
        YieldType::Science,
        YieldType::Culture,
        YieldType::Gold,
        YieldType::Faith,
        YieldType::Production,
        YieldType::Food,
    ];
}

catalog_enum! {
    /// Natural wonders referenced by adjacency tables
    NaturalWonder {
        None => "none",
        CliffsOfDover => "cliffs_of_dover",
        CraterLake => "crater_lake",
        DeadSea => "dead_sea",
        Galapagos => "galapagos",
        GreatBarrierReef => "great_barrier_reef",
        MountEverest => "mount_everest",
        MountKilimanjaro => "mount_kilimanjaro",
        Pantanal => "pantanal",
        TorresDelPaine => "torres_del_paine",
        TsingyDeBemaraha => "tsingy_de_bemaraha",
        Uluru => "uluru",
        Yosemite => "yosemite",
        DelicateArch => "delicate_arch",
        EyeOfTheSahara => "eye_of_the_sahara",
        LakeRetba => "lake_retba",
        Matterhorn => "matterhorn",
        MountRoraima => "mount_roraima",
        UbsunurHollow => "ubsunur_hollow",
        ZhangyeDanxia => "zhangye_danxia",
        ChocolateHills => "chocolate_hills",
        Gobustan => "gobustan",
        IkKil => "ik_kil",
        MatoTipila => "mato_tipila",
        MountVesuvius => "mount_vesuvius",
        Pamukkale => "pamukkale",
        SaharaElBeyda => "sahara_el_beyda",
        BermudaTriangle => "bermuda_triangle",
        FountainOfYouth => "fountain_of_youth",
        Paititi => "paititi",
        HaLongBay => "ha_long_bay",
        Eyjafjallajokull => "eyjafjallajokull",
        GiantsCauseway => "giants_causeway",
        Lysefjord => "lysefjord",
        Piopiotahi => "piopiotahi",
    }
}
