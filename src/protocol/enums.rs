//! Byte-valued enumerations carried inside packet bodies.
//!
//! Each enum travels as a single unsigned byte. Values outside the known set
//! are kept in an `Unknown` variant instead of failing the decode, so every
//! byte survives a decode/encode cycle unchanged.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        ///
        /// Values compare and hash by their wire byte, so `Unknown(b)` for a
        /// byte that has a named variant is equal to that variant.
        #[derive(Debug, Clone, Copy, Serialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A byte outside the known set
            Unknown(u8),
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_byte() == other.as_byte()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_byte().hash(state);
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #[derive(Deserialize)]
                enum Repr {
                    $($variant,)+
                    Unknown(u8),
                }

                let byte = match Repr::deserialize(deserializer)? {
                    $(Repr::$variant => $value,)+
                    Repr::Unknown(other) => other,
                };
                Ok($name::from_byte(byte))
            }
        }

        impl $name {
            pub fn from_byte(byte: u8) -> Self {
                match byte {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }

            pub fn as_byte(self) -> u8 {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(other) => other,
                }
            }
        }

        impl From<u8> for $name {
            fn from(byte: u8) -> Self {
                $name::from_byte(byte)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.as_byte()
            }
        }
    };
}

byte_enum! {
    /// Progress of a block being dug.
    pub enum DigStatus {
        Started = 0,
        Finished = 2,
        Drop = 4,
    }
}

byte_enum! {
    /// Block face a player is interacting with.
    pub enum FaceOffset {
        MinusY = 0,
        PlusY = 1,
        MinusZ = 2,
        PlusZ = 3,
        MinusX = 4,
        PlusX = 5,
    }
}

byte_enum! {
    /// Object and vehicle kinds spawned by `AddObjectVehicle`.
    pub enum MovingObject {
        Boat = 1,
        Minecart = 10,
        StorageCart = 11,
        PoweredCart = 12,
        ActivatedTnt = 50,
        Arrow = 60,
        ThrownSnowball = 61,
        ThrownEgg = 62,
        FallingSand = 70,
        FallingGravel = 71,
        FishingFloat = 90,
    }
}

byte_enum! {
    /// Mob kinds spawned by `MobSpawn`.
    pub enum MobType {
        Creeper = 50,
        Skeleton = 51,
        Spider = 52,
        GiantZombie = 53,
        Zombie = 54,
        Slime = 55,
        Ghast = 56,
        ZombiePigman = 57,
        Pig = 90,
        Sheep = 91,
        Cow = 92,
        Hen = 93,
        Squid = 94,
        Wolf = 95,
    }
}

byte_enum! {
    /// Wool and dye colours, as found in block damage values and sheep metadata.
    pub enum WoolColor {
        White = 0,
        Orange = 1,
        Magenta = 2,
        LightBlue = 3,
        Yellow = 4,
        Lime = 5,
        Pink = 6,
        Gray = 7,
        Silver = 8,
        Cyan = 9,
        Purple = 10,
        Blue = 11,
        Brown = 12,
        Green = 13,
        Red = 14,
        Black = 15,
    }
}
