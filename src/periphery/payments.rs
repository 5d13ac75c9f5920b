//! Calldata for the router's payment helpers (`unwrapWETH9`, `sweepToken`,
//! `refundETH`), optionally skimming a fee to a third party.

use crate::entities::Token;
use crate::error::MathError;
use crate::math::full_math::mul_div;
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, sol};

sol! {
    interface IPeripheryPaymentsWithFee {
        function unwrapWETH9(uint256 amountMinimum, address recipient) external payable;
        function unwrapWETH9WithFee(
            uint256 amountMinimum,
            address recipient,
            uint256 feeBips,
            address feeRecipient
        ) external payable;
        function sweepToken(
            address token,
            uint256 amountMinimum,
            address recipient
        ) external payable;
        function sweepTokenWithFee(
            address token,
            uint256 amountMinimum,
            address recipient,
            uint256 feeBips,
            address feeRecipient
        ) external payable;
        function refundETH() external payable;
    }
}

use IPeripheryPaymentsWithFee::{
    refundETHCall, sweepTokenCall, sweepTokenWithFeeCall, unwrapWETH9Call, unwrapWETH9WithFeeCall,
};

const U256_E4: U256 = U256::from_limbs([10000, 0, 0, 0]);

/// A fraction `numerator / denominator`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percent {
    pub numerator: U256,
    pub denominator: U256,
}

impl Percent {
    pub fn new(numerator: U256, denominator: U256) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `floor(self * 10000)`.
    pub fn to_bips(&self) -> Result<U256, MathError> {
        mul_div(self.numerator, U256_E4, self.denominator)
    }
}

/// Fee taken out of the swept or unwrapped amount.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeOptions {
    pub fee: Percent,
    pub recipient: Address,
}

pub fn encode_unwrap_weth9(
    amount_minimum: U256,
    recipient: Address,
    fee_options: Option<&FeeOptions>,
) -> Result<Bytes, MathError> {
    let calldata = match fee_options {
        Some(options) => unwrapWETH9WithFeeCall {
            amountMinimum: amount_minimum,
            recipient,
            feeBips: options.fee.to_bips()?,
            feeRecipient: options.recipient,
        }
        .abi_encode(),
        None => unwrapWETH9Call {
            amountMinimum: amount_minimum,
            recipient,
        }
        .abi_encode(),
    };
    Ok(calldata.into())
}

pub fn encode_sweep_token(
    token: &Token,
    amount_minimum: U256,
    recipient: Address,
    fee_options: Option<&FeeOptions>,
) -> Result<Bytes, MathError> {
    let calldata = match fee_options {
        Some(options) => sweepTokenWithFeeCall {
            token: token.address,
            amountMinimum: amount_minimum,
            recipient,
            feeBips: options.fee.to_bips()?,
            feeRecipient: options.recipient,
        }
        .abi_encode(),
        None => sweepTokenCall {
            token: token.address,
            amountMinimum: amount_minimum,
            recipient,
        }
        .abi_encode(),
    };
    Ok(calldata.into())
}

pub fn encode_refund_eth() -> Bytes {
    refundETHCall {}.abi_encode().into()
}
