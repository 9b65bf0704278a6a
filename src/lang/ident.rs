// Declared kind of a sketch variable. Accepted as grammar only; every kind
// holds the same unconstrained number at runtime.

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum VarType {
    Int,
    Long,
    Short,
    Byte,
    Float,
    Double,
    Int8,
    Int16,
    Int32,
    Uint8,
    Uint16,
    Uint32,
}

impl VarType {
    pub fn from_keyword(s: &str) -> Option<VarType> {
        use VarType::*;
        Some(match s {
            "int" => Int,
            "long" => Long,
            "short" => Short,
            "byte" => Byte,
            "float" => Float,
            "double" => Double,
            "int8_t" => Int8,
            "int16_t" => Int16,
            "int32_t" => Int32,
            "uint8_t" => Uint8,
            "uint16_t" => Uint16,
            "uint32_t" => Uint32,
            _ => return None,
        })
    }
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use VarType::*;
        match self {
            Int => write!(f, "int"),
            Long => write!(f, "long"),
            Short => write!(f, "short"),
            Byte => write!(f, "byte"),
            Float => write!(f, "float"),
            Double => write!(f, "double"),
            Int8 => write!(f, "int8_t"),
            Int16 => write!(f, "int16_t"),
            Int32 => write!(f, "int32_t"),
            Uint8 => write!(f, "uint8_t"),
            Uint16 => write!(f, "uint16_t"),
            Uint32 => write!(f, "uint32_t"),
        }
    }
}
