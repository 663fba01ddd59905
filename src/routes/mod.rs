pub mod customers;
pub mod frequency;
pub mod purchases;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(
            super::frequency::GET_PURCHASE_FREQUENCY,
            "get_purchase_frequency"
        );
        assert_eq!(super::customers::LIST_CUSTOMERS, "list_customers");
        assert_eq!(
            super::purchases::GET_CUSTOMER_PURCHASES,
            "get_customer_purchases"
        );
    }
}
