// Wire codec for a message struct: fields are encoded in declaration order,
// which is the order the protocol specifies.
macro_rules! message_codec {
    ($name:ident { $($field:ident),+ $(,)? }) => {
        impl sv2_wire::Serialize for $name {
            fn get_size(&self) -> usize {
                0 $(+ self.$field.get_size())+
            }

            fn serialize(&self, dst: &mut Vec<u8>) {
                $(self.$field.serialize(dst);)+
            }
        }

        impl sv2_wire::Deserialize for $name {
            fn deserialize(
                reader: &mut sv2_wire::Reader<'_>,
            ) -> Result<Self, sv2_wire::Error> {
                Ok(Self {
                    $($field: sv2_wire::Deserialize::deserialize(reader)?,)+
                })
            }
        }
    };
}
