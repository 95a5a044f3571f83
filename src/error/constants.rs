use super::const_error;

const_error!(BAD_REQUEST, BAD_REQUEST, "Bad request");
const_error!(RESOURCE_NOT_FOUND, NOT_FOUND, "Resource Not found");
const_error!(METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED, "Method not allowed");
const_error!(UNPROCESSABLE, UNPROCESSABLE_ENTITY, "Unprocessable");
const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "Internal Server Error");
