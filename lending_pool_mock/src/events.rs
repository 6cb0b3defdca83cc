multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PoolEventsModule {
    #[event("supply")]
    fn supply_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] interest_rate_mode: u8,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("flash_loan")]
    fn flash_loan_event(
        &self,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] initiator: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] premium: &BigUint,
        #[indexed] referral_code: u16,
    );
}
