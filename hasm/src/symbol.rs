use ahash::AHashMap;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

use crate::error::ErrorKind;
use crate::tables::{MAX_ADDRESS, PREDEFINED, VARIABLE_BASE};
use crate::Address;


/// Symbol name to address bindings for a single translation run.
///
/// Seeded with the predefined registers and I/O maps; labels are added by
/// the first pass and variables by the second. A bound name is never rebound.
#[derive(Debug)]
pub struct SymbolTable {
    si: StringInterner<DefaultBackend>,
    addresses: AHashMap<DefaultSymbol, Address>,
    next_variable: Address,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = Self {
            si: StringInterner::new(),
            addresses: AHashMap::with_capacity(PREDEFINED.len()),
            next_variable: VARIABLE_BASE,
        };
        for (name, address) in PREDEFINED {
            let sym = table.si.get_or_intern_static(name);
            table.addresses.insert(sym, address);
        }
        table
    }

    pub fn lookup(&self, name: &str) -> Option<Address> {
        let sym = self.si.get(name)?;
        self.addresses.get(&sym).copied()
    }

    /// Binds `name` to an instruction address.
    pub fn define_label(&mut self, name: &str, address: Address) -> Result<(), ErrorKind> {
        if self.lookup(name).is_some() {
            return Err(ErrorKind::DuplicateLabel(name.to_owned()));
        }
        let sym = self.si.get_or_intern(name);
        self.addresses.insert(sym, address);
        tracing::debug!(label = name, address, "bound label");
        Ok(())
    }

    /// Returns the address bound to `name`, binding it to the next free
    /// variable slot first if it is unknown.
    pub fn resolve_or_allocate_variable(&mut self, name: &str) -> Result<Address, ErrorKind> {
        if let Some(address) = self.lookup(name) {
            return Ok(address);
        }
        let address = self.next_variable;
        if address > MAX_ADDRESS {
            return Err(ErrorKind::AddressOverflow(name.to_owned()));
        }
        let sym = self.si.get_or_intern(name);
        self.addresses.insert(sym, address);
        self.next_variable += 1;
        tracing::debug!(variable = name, address, "allocated variable");
        Ok(address)
    }

    /// Address the next new variable will receive.
    pub fn next_variable(&self) -> Address {
        self.next_variable
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
