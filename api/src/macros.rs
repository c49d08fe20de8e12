#[macro_export]
macro_rules! state {
    // $acct_ty is your AccountType enum variant, $data_ty is the struct name
    ($acct_ty:ident, $data_ty:ident) => {
        impl $data_ty {
            /// 8 bytes for the discriminator + the POD struct size
            pub const fn get_size() -> usize {
                8 + core::mem::size_of::<Self>()
            }

            /// Immutably unpack from a raw account data slice
            pub fn unpack(data: &[u8]) -> Result<&Self, ProgramError> {
                let data = &data[..Self::get_size()];
                Self::try_from_bytes(data)
            }

            /// Mutably unpack from a raw account data slice
            pub fn unpack_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
                let data = &mut data[..Self::get_size()];
                Self::try_from_bytes_mut(data)
            }
        }

        // steel account macro
        account!($acct_ty, $data_ty);
    };
}
