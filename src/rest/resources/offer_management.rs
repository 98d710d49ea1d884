//! Offer API branch (`offerManagement`).

resource_node!(
    /// Root of the offer API.
    OfferManagement
);

resource_node!(
    /// Changes to competing offers on the seller's products (`competing-offer-changes`).
    CompetingOfferChanges: Listable
);

resource_node!(
    /// The seller's offers (`offers`).
    Offers: Creatable
);

resource_node!(
    /// Offer search (`offers/search`). Criteria are POSTed.
    OfferSearch: Creatable
);

resource_node!(
    /// Offer integration packages (`offer-integration-packages`).
    OfferIntegrationPackages: Gettable, Creatable
);

resource_node!(
    /// Seller deal search (`seller-deals/search`). Criteria are POSTed.
    SellerDealsSearch: Creatable
);

impl OfferManagement {
    /// Returns the `competing-offer-changes` node.
    #[must_use]
    pub fn competing_offer_changes(&self) -> CompetingOfferChanges {
        CompetingOfferChanges::new(self.pool.child(["competing-offer-changes"]))
    }

    /// Returns the `offers` node.
    #[must_use]
    pub fn offers(&self) -> Offers {
        Offers::new(self.pool.child(["offers"]))
    }

    /// Returns the `offer-integration-packages` node.
    #[must_use]
    pub fn offer_integration_packages(&self) -> OfferIntegrationPackages {
        OfferIntegrationPackages::new(self.pool.child(["offer-integration-packages"]))
    }

    /// Returns the `seller-deals/search` node.
    #[must_use]
    pub fn seller_deals_search(&self) -> SellerDealsSearch {
        SellerDealsSearch::new(self.pool.child(["seller-deals/search"]))
    }
}

impl Offers {
    /// Returns the `offers/search` node.
    #[must_use]
    pub fn search(&self) -> OfferSearch {
        OfferSearch::new(self.pool.child(["search"]))
    }
}
