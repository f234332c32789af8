//! Page and wizard step tokens used for routing.

catalog! {
    /// Top-level admin screens.
    ///
    PageName("PageNames") {
        ManageContentPage => "MANAGE_CONTENT_PAGE",
        ManagePermissionsPage => "MANAGE_PERMISSIONS_PAGE",
        UserPermissionsPage => "USER_PERMISSIONS_PAGE",
    }
}

catalog! {
    /// Steps within the content import/export wizard.
    ///
    ContentWizardPage("ContentWizardPages") {
        ChooseImportSource => "CHOOSE_IMPORT_SOURCE",
        Export => "EXPORT",
        /// Import from a local drive
        ImportLocal => "IMPORT_LOCAL",
        /// Import from the network
        ImportNetwork => "IMPORT_NETWORK",
        AvailableChannels => "AVAILABLE_CHANNELS",
    }
}
