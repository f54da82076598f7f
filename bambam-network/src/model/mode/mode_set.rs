use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// set of travel modes permitted on a way or edge. bit positions are
    /// part of the output format (the `modes` column) and must not be reordered.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ModeSet: u32 {
        const FOOT = 1 << 0;
        const BICYCLE = 1 << 1;
        const MOPED = 1 << 2;
        const MOTORISED = 1 << 3;
        const PASSENGER = 1 << 4;
        const DELIVERY = 1 << 5;
        const BUS = 1 << 6;
        const PSV = 1 << 7;
        const RAIL = 1 << 8;
        const TRAM = 1 << 9;
        const HORSE = 1 << 10;
        const SOFT = 1 << 11;
        /// marks a way closed to traffic, not a travel mode
        const CLOSED = 1 << 12;

        const ALL = Self::FOOT.bits()
            | Self::BICYCLE.bits()
            | Self::MOPED.bits()
            | Self::MOTORISED.bits()
            | Self::PASSENGER.bits()
            | Self::DELIVERY.bits()
            | Self::BUS.bits()
            | Self::PSV.bits()
            | Self::RAIL.bits()
            | Self::TRAM.bits()
            | Self::HORSE.bits()
            | Self::SOFT.bits();
    }
}

impl ModeSet {
    /// modes removed from the opposing direction of a one-way
    pub const ONEWAY_RESTRICTED: ModeSet = ModeSet::MOTORISED
        .union(ModeSet::BICYCLE)
        .union(ModeSet::RAIL)
        .union(ModeSet::TRAM);

    pub const WALK: ModeSet = ModeSet::FOOT;
    pub const BIKE: ModeSet = ModeSet::BICYCLE;
    pub const PUBLIC_TRANSPORT: ModeSet = ModeSet::BUS
        .union(ModeSet::PSV)
        .union(ModeSet::RAIL)
        .union(ModeSet::TRAM);
    pub const MOTORISED_INDIVIDUAL: ModeSet = ModeSet::MOTORISED
        .union(ModeSet::PASSENGER)
        .union(ModeSet::MOPED);

    /// true if no bit is set. a set holding only [`ModeSet::CLOSED`] is not
    /// impassable: edges are still emitted for it, and no travel mode can use them.
    pub fn is_impassable(&self) -> bool {
        self.is_empty()
    }

    pub fn allows_walk(&self) -> bool {
        self.intersects(Self::WALK)
    }

    pub fn allows_bike(&self) -> bool {
        self.intersects(Self::BIKE)
    }

    pub fn allows_public_transport(&self) -> bool {
        self.intersects(Self::PUBLIC_TRANSPORT)
    }

    pub fn allows_motorised_individual(&self) -> bool {
        self.intersects(Self::MOTORISED_INDIVIDUAL)
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        ModeSet::empty()
    }
}

impl Serialize for ModeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        ModeSet::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("{bits} contains unknown mode bits"))
        })
    }
}
