use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_core_content_impl::ContentFeatureServiceImpl;
use portfolio_core_health_impl::HealthFeatureServiceImpl;
use portfolio_email_impl::EmailServiceImpl;
use portfolio_extern_impl::content_store::ContentStoreApiServiceImpl;
use portfolio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = portfolio_api_rest::RestServer<HealthFeature, ContentFeature, ContactFeature>;

// Email
pub type Email = EmailServiceImpl;

// Extern
pub type ContentStoreApi = ContentStoreApiServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Email, ContentStoreApi>;

pub type ContentFeature = ContentFeatureServiceImpl<ContentStoreApi>;

pub type ContactFeature = ContactFeatureServiceImpl<Email, Template>;
