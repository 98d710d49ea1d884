//! Order API branch (`OrderManagement/orders`).
//!
//! Per-order nodes take the order number as given. It is inserted into the
//! path verbatim, without percent-encoding, so a number containing `/`, `?`
//! or `#` addresses a different URL. Cdiscount order numbers are
//! alphanumeric; encode anything else before passing it in.

resource_node!(
    /// Root of the order API.
    OrderManagement
);

resource_node!(
    /// Order search (`search`). Criteria are POSTed.
    OrderSearch: Creatable
);

resource_node!(
    /// Commercial gestures granted on one order (`{order}/commercial-gestures`).
    CommercialGestures: Creatable, Listable
);

resource_node!(
    /// Gestures an order is eligible to (`{order}/commercial-gesture-eligibilities`).
    CommercialGestureEligibilities: Listable
);

resource_node!(
    /// Order validation (`{order}/validate`).
    OrderValidation: Updatable
);

impl OrderManagement {
    /// Returns the `search` node.
    #[must_use]
    pub fn search_orders(&self) -> OrderSearch {
        OrderSearch::new(self.pool.child(["search"]))
    }

    /// Returns the commercial gestures node of `order_number`.
    ///
    /// `order_number` is not encoded: `/` adds path segments, `?` starts the
    /// query and `#` cuts the rest of the path into a fragment.
    #[must_use]
    pub fn commercial_gestures(&self, order_number: &str) -> CommercialGestures {
        CommercialGestures::new(self.pool.child([order_number, "commercial-gestures"]))
    }

    /// Returns the commercial gesture eligibilities node of `order_number`.
    ///
    /// `order_number` is not encoded: `/` adds path segments, `?` starts the
    /// query and `#` cuts the rest of the path into a fragment.
    #[must_use]
    pub fn commercial_gesture_eligibilities(
        &self,
        order_number: &str,
    ) -> CommercialGestureEligibilities {
        CommercialGestureEligibilities::new(
            self.pool
                .child([order_number, "commercial-gesture-eligibilities"]),
        )
    }

    /// Returns the validation node of `order_number`.
    ///
    /// `order_number` is not encoded: `/` adds path segments, `?` starts the
    /// query and `#` cuts the rest of the path into a fragment.
    #[must_use]
    pub fn validate_order(&self, order_number: &str) -> OrderValidation {
        OrderValidation::new(self.pool.child([order_number, "validate"]))
    }
}
