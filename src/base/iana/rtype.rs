//! Resource Record (RR) TYPEs.

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    /// This type carries the types relevant for the record data
    /// implementations of this crate plus the other commonly encountered
    /// assigned types. Values without a constant can still be represented
    /// through [`from_int`][Rtype::from_int] and display in the `TYPE###`
    /// form defined by [RFC 3597].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// For Responsible Person.
    ///
    /// See RFC 1183.
    (RP => 17, "RP")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Location information.
    ///
    /// See RFC 1876.
    (LOC => 29, "LOC")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// Naming authority pointer.
    ///
    /// See RFC 2915, RFC 2168, and RFC 3403.
    (NAPTR => 35, "NAPTR")

    /// A certificate.
    ///
    /// See RFC 4398.
    (CERT => 37, "CERT")

    /// DNAME redirection.
    ///
    /// See RFC 6672.
    (DNAME => 39, "DNAME")

    /// Option pseudo record type.
    ///
    /// See RFC 6891.
    (OPT => 41, "OPT")

    /// Delegation signer.
    ///
    /// See RFC 4034.
    (DS => 43, "DS")

    /// SSH key fingerprint.
    ///
    /// See RFC 4255.
    (SSHFP => 44, "SSHFP")

    /// RRset signature.
    ///
    /// See RFC 4034.
    (RRSIG => 46, "RRSIG")

    /// Next secure record.
    ///
    /// See RFC 4034.
    (NSEC => 47, "NSEC")

    /// DNS security key.
    ///
    /// See RFC 4034.
    (DNSKEY => 48, "DNSKEY")

    /// Hashed authenticated denial of existence.
    ///
    /// See RFC 5155.
    (NSEC3 => 50, "NSEC3")

    /// Hashed authenticated denial of existence parameters.
    ///
    /// See RFC 5155.
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// TLSA certificate association.
    ///
    /// See RFC 6698.
    (TLSA => 52, "TLSA")

    /// Host Identity Protocol.
    ///
    /// See RFC 8005.
    (HIP => 55, "HIP")

    /// Child DS.
    ///
    /// See RFC 7344.
    (CDS => 59, "CDS")

    /// DNSKEY the child wants reflected in DS.
    ///
    /// See RFC 7344.
    (CDNSKEY => 60, "CDNSKEY")

    /// OpenPGP key.
    ///
    /// See RFC 7929.
    (OPENPGPKEY => 61, "OPENPGPKEY")

    /// Message digest for DNS zone.
    ///
    /// See RFC 8976.
    (ZONEMD => 63, "ZONEMD")

    /// General purpose service endpoints.
    ///
    /// See RFC 9460.
    (SVCB => 64, "SVCB")

    /// HTTPS specific service endpoints.
    ///
    /// See RFC 9460.
    (HTTPS => 65, "HTTPS")

    /// Sender policy framework.
    ///
    /// See RFC 7208.
    (SPF => 99, "SPF")

    /// Certification authority restriction.
    ///
    /// See RFC 6844.
    (CAA => 257, "CAA")
}

int_enum_str_with_prefix!(Rtype, "TYPE", b"TYPE", u16, "unknown record type");

//============ Tests =========================================================
