// Hook interface every liquidity pool funding a lending program implements.

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct LiquidityPoolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for LiquidityPoolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = LiquidityPoolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        LiquidityPoolProxyMethods { wrapped_tx: tx }
    }
}

pub struct LiquidityPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, To, Gas> LiquidityPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn on_before_loan_taken<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        loan_id: Arg0,
        borrower: Arg1,
        borrow_amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("onBeforeLoanTaken")
            .argument(&loan_id)
            .argument(&borrower)
            .argument(&borrow_amount)
            .original_result()
    }

    pub fn on_after_loan_payment<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        loan_id: Arg0,
        repayment_amount: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, bool> {
        self.wrapped_tx
            .raw_call("onAfterLoanPayment")
            .argument(&loan_id)
            .argument(&repayment_amount)
            .original_result()
    }

    pub fn on_after_loan_revocation<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        loan_id: Arg0,
        borrower: Arg1,
        refund_amount: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, bool> {
        self.wrapped_tx
            .raw_call("onAfterLoanRevocation")
            .argument(&loan_id)
            .argument(&borrower)
            .argument(&refund_amount)
            .original_result()
    }
}
