//! ERC-20 call encoding.
//!
//! Only the four functions the router touches. Encoding is pure so the
//! allowance guard can build its approval transaction without a provider.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// Minimal ERC-20 surface used by the router.
    interface IERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
    }
}

/// Calldata for `approve(spender, amount)`.
pub fn approve_calldata(spender: Address, amount: U256) -> Bytes {
    IERC20::approveCall { spender, amount }.abi_encode().into()
}

/// Calldata for `allowance(owner, spender)`.
pub fn allowance_calldata(owner: Address, spender: Address) -> Bytes {
    IERC20::allowanceCall { owner, spender }.abi_encode().into()
}

/// Calldata for `balanceOf(account)`.
pub fn balance_of_calldata(account: Address) -> Bytes {
    IERC20::balanceOfCall { account }.abi_encode().into()
}

/// Calldata for `decimals()`.
pub fn decimals_calldata() -> Bytes {
    IERC20::decimalsCall {}.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_approve_selector_and_layout() {
        let spender = address!("80eba3855878739f4710233a8a19d89bdd2ffb8e");
        let data = approve_calldata(spender, U256::from(1_000_000_000_000_000_000u128));

        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[..4], &[0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(&data[16..36], spender.as_slice());
        assert_eq!(
            U256::from_be_slice(&data[36..68]),
            U256::from(1_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_read_selectors() {
        let owner = Address::repeat_byte(0x11);
        let spender = Address::repeat_byte(0x22);
        assert_eq!(&allowance_calldata(owner, spender)[..4], &[0xdd, 0x62, 0xed, 0x3e]);
        assert_eq!(&balance_of_calldata(owner)[..4], &[0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(decimals_calldata().as_ref(), &[0x31, 0x3c, 0xe5, 0x67]);
    }
}
