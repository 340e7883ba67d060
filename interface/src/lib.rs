//! Public interface layer for the ARC programs: program ids, PDA seeds, account state, instruction
//! schemas and errors, shared by the on-chain programs and the client.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "program")]
pub mod accounts;
pub mod error;
pub mod instructions;
pub mod seeds;
pub mod state;
pub mod utils;

/// Program ids for the three ARC programs.
pub mod program {
    pub mod core_ds {
        use solana_address::Address;

        pub const ID: Address =
            Address::from_str_const("GN5Ww5qa8ej4evFCJxMhV6AFEPKhD1Drdu8qYYptVgDJ");
    }

    pub mod registry {
        use solana_address::Address;

        pub const ID: Address =
            Address::from_str_const("H5mieGWWK6qukHoNzbR6ysLxReeQC4JHZcNM6JkPQnm3");
    }

    pub mod tsab {
        use solana_address::Address;

        pub const ID: Address =
            Address::from_str_const("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");
    }
}
